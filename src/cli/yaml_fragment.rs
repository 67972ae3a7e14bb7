//! YAML fragment command: parses the text between the commit data delimiters.

use anyhow::Result;
use clap::Parser;

use crate::cli::{InputArgs, OutputFormat};
use crate::dependabot::parse_commit_yaml;

/// YAML fragment command options.
#[derive(Parser)]
pub struct YamlFragmentCommand {
    /// Input text source.
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

impl YamlFragmentCommand {
    /// Executes the YAML fragment command.
    pub fn execute(self) -> Result<()> {
        let yaml = self.input.read()?;
        self.format.print(&parse_commit_yaml(&yaml)?)
    }
}
