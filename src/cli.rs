//! CLI interface for dependabot-parse.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

pub mod branch;
pub mod commit_message;
pub mod pull_request;
pub mod yaml_fragment;

/// dependabot-parse: Extracts structured metadata from Dependabot pull requests.
#[derive(Parser)]
#[command(name = "dependabot-parse")]
#[command(
    about = "Extracts structured metadata from Dependabot pull requests",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Parses a pull request from its branch name and first commit message.
    #[command(name = "pull-request")]
    PullRequest(pull_request::PullRequestCommand),
    /// Parses a commit message.
    #[command(name = "commit-message")]
    CommitMessage(commit_message::CommitMessageCommand),
    /// Parses a branch name given the updated dependency names.
    Branch(branch::BranchCommand),
    /// Parses a bare commit data YAML fragment.
    #[command(name = "yaml-fragment")]
    YamlFragment(yaml_fragment::YamlFragmentCommand),
}

impl Cli {
    /// Executes the CLI command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::PullRequest(cmd) => cmd.execute(),
            Commands::CommitMessage(cmd) => cmd.execute(),
            Commands::Branch(cmd) => cmd.execute(),
            Commands::YamlFragment(cmd) => cmd.execute(),
        }
    }
}

/// Output format for parse results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// YAML format.
    #[default]
    Yaml,
    /// Pretty-printed JSON format.
    Json,
}

impl OutputFormat {
    /// Renders a value in this format.
    pub fn render<T: Serialize>(self, value: &T) -> Result<String> {
        match self {
            Self::Yaml => crate::data::to_yaml(value),
            Self::Json => {
                serde_json::to_string_pretty(value).context("Failed to serialize output as JSON")
            }
        }
    }

    /// Renders a value and writes it to stdout.
    pub fn print<T: Serialize>(self, value: &T) -> Result<()> {
        let rendered = self.render(value)?;
        println!("{}", rendered.trim_end());
        Ok(())
    }
}

/// Where to read free-form input text from.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// File to read the input from (defaults to stdin).
    #[arg(long, value_name = "FILE")]
    pub message_file: Option<PathBuf>,
}

impl InputArgs {
    /// Reads the whole input text.
    pub fn read(&self) -> Result<String> {
        match &self.message_file {
            Some(path) => read_file(path),
            None => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read input from stdin")?;
                Ok(text)
            }
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ParsedBranch;

    fn branch() -> ParsedBranch {
        ParsedBranch {
            ecosystem: "cargo".to_string(),
            directory: "/".to_string(),
        }
    }

    #[test]
    fn renders_yaml() -> Result<()> {
        let rendered = OutputFormat::Yaml.render(&branch())?;
        assert!(rendered.starts_with("ecosystem: cargo\n"), "{rendered}");
        let reparsed: ParsedBranch = serde_yaml::from_str(&rendered)?;
        assert_eq!(reparsed, branch());
        Ok(())
    }

    #[test]
    fn renders_json() -> Result<()> {
        insta::assert_snapshot!(OutputFormat::Json.render(&branch())?, @r#"
        {
          "ecosystem": "cargo",
          "directory": "/"
        }
        "#);
        Ok(())
    }

    #[test]
    fn reads_message_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("message.txt");
        std::fs::write(&path, "Bumps [a](b) from 1.0.0 to 1.0.1.")?;

        let input = InputArgs {
            message_file: Some(path),
        };
        assert_eq!(input.read()?, "Bumps [a](b) from 1.0.0 to 1.0.1.");
        Ok(())
    }

    #[test]
    fn missing_message_file_has_context() {
        let input = InputArgs {
            message_file: Some(PathBuf::from("/nonexistent/message.txt")),
        };
        let err = input.read().unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Failed to read input file: /nonexistent/message.txt"));
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from([
            "dependabot-parse",
            "branch",
            "--branch",
            "dependabot/cargo/serde-1.0.0",
            "--dependency",
            "serde",
            "--format",
            "json",
        ]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Branch(branch::BranchCommand {
                format: OutputFormat::Json,
                ..
            }))
        ));
    }
}
