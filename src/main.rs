use std::process;

use clap::Parser;
use dependabot_parse::Cli;
use tracing::debug;

fn main() {
    // RUST_LOG controls verbosity, "warn" by default. Logs go to stderr so
    // stdout only carries the parse result.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = cli.execute() {
        eprintln!("Error: {e}");

        // Stage errors already render their cause, so the chain is only logged.
        for cause in e.chain().skip(1) {
            debug!("Caused by: {cause}");
        }

        process::exit(1);
    }
}
