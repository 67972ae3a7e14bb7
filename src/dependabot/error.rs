//! Errors raised while parsing Dependabot metadata.
//!
//! Each stage has its own error type. Rendered messages carry a stage
//! prefix followed by the cause, and the cause is also kept as the error
//! source so callers can match on it.

use thiserror::Error;

use crate::data::yaml::json_quote;
use crate::data::{SchemaError, YamlError};

/// Broad classification shared by every stage error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A structural marker is missing from the input.
    NotFound,
    /// The input could not be deserialized.
    MalformedInput,
    /// The input deserialized but does not have the required shape.
    SchemaViolation,
    /// The caller supplied input that cannot be parsed at all.
    PreconditionFailed,
}

/// Failure to parse a bare YAML fragment.
#[derive(Error, Debug)]
pub enum CommitYamlError {
    /// The fragment is not valid YAML.
    #[error("Invalid YAML fragment: {0}")]
    InvalidYaml(#[source] YamlError),

    /// The fragment does not match the expected shape.
    #[error("{0}")]
    InvalidFragment(#[source] SchemaError),
}

impl CommitYamlError {
    /// Returns the broad classification of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidYaml(_) => ErrorKind::MalformedInput,
            Self::InvalidFragment(_) => ErrorKind::SchemaViolation,
        }
    }
}

/// Failure to parse a Dependabot commit message.
#[derive(Error, Debug)]
pub enum CommitMessageError {
    /// No `---` ... `...` block was found in the message.
    #[error("Unable to parse Dependabot commit message: Commit data not found.")]
    CommitDataNotFound,

    /// The block is not valid YAML.
    #[error("Unable to parse Dependabot commit message: Invalid commit data: {0}")]
    InvalidYaml(#[source] YamlError),

    /// The block does not match the expected shape.
    #[error("Unable to parse Dependabot commit message: {0}")]
    InvalidCommitData(#[source] SchemaError),
}

impl CommitMessageError {
    /// Returns the broad classification of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::CommitDataNotFound => ErrorKind::NotFound,
            Self::InvalidYaml(_) => ErrorKind::MalformedInput,
            Self::InvalidCommitData(_) => ErrorKind::SchemaViolation,
        }
    }
}

/// Failure to parse a Dependabot branch name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BranchNameError {
    /// No dependency names were supplied to guide segmentation.
    #[error("Unable to parse Dependabot branch name: Dependency list must not be empty.")]
    EmptyDependencies,

    /// The branch was not created by Dependabot.
    #[error(
        "Unable to parse Dependabot branch name: Branch name {} must start with \"dependabot\".",
        json_quote(.branch)
    )]
    NotDependabot {
        /// The branch name as given.
        branch: String,
    },

    /// The branch has no segment after the `dependabot` prefix.
    #[error(
        "Unable to parse Dependabot branch name: Branch name {} has no ecosystem segment.",
        json_quote(.branch)
    )]
    MissingEcosystem {
        /// The branch name as given.
        branch: String,
    },
}

impl BranchNameError {
    /// Returns the broad classification of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyDependencies => ErrorKind::PreconditionFailed,
            Self::NotDependabot { .. } | Self::MissingEcosystem { .. } => ErrorKind::NotFound,
        }
    }
}

/// Failure to parse a Dependabot pull request.
#[derive(Error, Debug)]
pub enum PullRequestError {
    /// The first commit message could not be parsed.
    #[error("{0}")]
    CommitMessage(#[from] CommitMessageError),

    /// The commit data declares no dependencies, so the branch cannot be segmented.
    #[error("Unable to parse Dependabot pull request: Commit data lists no updated dependencies.")]
    NoUpdatedDependencies,

    /// The branch name could not be parsed.
    #[error("{0}")]
    BranchName(#[from] BranchNameError),
}

impl PullRequestError {
    /// Returns the broad classification of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::CommitMessage(e) => e.kind(),
            Self::NoUpdatedDependencies => ErrorKind::PreconditionFailed,
            Self::BranchName(e) => e.kind(),
        }
    }
}
