//! Parsers for the metadata Dependabot attaches to its pull requests.

pub mod branch;
pub mod commit_message;
pub mod commit_yaml;
pub mod error;
pub mod pull_request;
pub mod update_type;

pub use branch::parse_branch_name;
pub use commit_message::{extract_commit_data, extract_updated_dependencies, parse_commit_message};
pub use commit_yaml::parse_commit_yaml;
pub use error::{
    BranchNameError, CommitMessageError, CommitYamlError, ErrorKind, PullRequestError,
};
pub use pull_request::parse_pull_request;
pub use update_type::{determine_update_type, infer_update_types};
