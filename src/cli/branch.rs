//! Branch command.

use anyhow::Result;
use clap::Parser;

use crate::cli::OutputFormat;
use crate::dependabot::parse_branch_name;

/// Branch command options.
#[derive(Parser)]
pub struct BranchCommand {
    /// Branch name to parse.
    #[arg(long)]
    pub branch: String,

    /// Updated dependency name, in declaration order (repeatable).
    #[arg(long = "dependency", value_name = "NAME")]
    pub dependencies: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

impl BranchCommand {
    /// Executes the branch command.
    pub fn execute(self) -> Result<()> {
        let parsed = parse_branch_name(self.dependencies.as_slice(), &self.branch)?;
        self.format.print(&parsed)
    }
}
