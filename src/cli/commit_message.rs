//! Commit message command.

use anyhow::Result;
use clap::Parser;

use crate::cli::{InputArgs, OutputFormat};
use crate::dependabot::parse_commit_message;

/// Commit message command options.
#[derive(Parser)]
pub struct CommitMessageCommand {
    /// Input text source.
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

impl CommitMessageCommand {
    /// Executes the commit message command.
    pub fn execute(self) -> Result<()> {
        let message = self.input.read()?;
        self.format.print(&parse_commit_message(&message)?)
    }
}
