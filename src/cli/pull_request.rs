//! Pull request command: parses a branch name together with its first commit message.

use anyhow::Result;
use clap::Parser;

use crate::cli::{InputArgs, OutputFormat};
use crate::dependabot::parse_pull_request;

/// Pull request command options.
#[derive(Parser)]
pub struct PullRequestCommand {
    /// Head branch name of the pull request.
    #[arg(long)]
    pub branch: String,

    /// Input text source.
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

impl PullRequestCommand {
    /// Executes the pull request command.
    pub fn execute(self) -> Result<()> {
        let message = self.input.read()?;
        let parsed = parse_pull_request(&self.branch, &message)?;
        self.format.print(&parsed)
    }
}
