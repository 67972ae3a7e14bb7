//! # dependabot-parse
//!
//! Extracts structured metadata from the branch name and commit message that
//! Dependabot attaches to its pull requests.
//!
//! ## Quick Start
//!
//! ```rust
//! use dependabot_parse::parse_pull_request;
//!
//! let message = "\
//! Bumps [coffee-rails](https://github.com/rails/coffee-rails) from 4.0.1 to 4.2.2.
//!
//! ---
//! updated-dependencies:
//! - dependency-name: coffee-rails
//!   dependency-type: direct:production
//! ...
//! ";
//!
//! let parsed = parse_pull_request("dependabot/bundler/coffee-rails-4.2.2", message)?;
//! assert_eq!(parsed.ecosystem, "bundler");
//! assert_eq!(parsed.directory, "/");
//! # Ok::<(), dependabot_parse::PullRequestError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod data;
pub mod dependabot;

pub use crate::cli::Cli;
pub use crate::data::{
    DependencyDeclaration, DependencyType, ParsedBranch, ParsedCommitMessage, ParsedPullRequest,
    UpdateType, UpdatedDependency,
};
pub use crate::dependabot::{
    parse_branch_name, parse_commit_message, parse_commit_yaml, parse_pull_request, ErrorKind,
    PullRequestError,
};

/// The current version of dependabot-parse.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
