//! Commit message parsing.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::data::schema::COMMIT_DATA;
use crate::data::{
    parse_yaml, CommitData, DependencyDeclaration, ParsedCommitMessage, UpdatedDependency,
};
use crate::dependabot::error::CommitMessageError;
use crate::dependabot::update_type::infer_update_types;

// A line of exactly "---", the YAML body, then a line of exactly "...".
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static COMMIT_DATA_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^-{3}\r?\n([\s\S]*?)\r?\n\.{3}\r?$").unwrap());

/// Returns the body of the first `---` ... `...` block, without delimiters.
pub fn find_commit_data(message: &str) -> Option<&str> {
    COMMIT_DATA_PATTERN
        .captures(message)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Extracts the validated commit data block from a commit message.
pub fn extract_commit_data(message: &str) -> Result<CommitData, CommitMessageError> {
    let yaml = find_commit_data(message).ok_or(CommitMessageError::CommitDataNotFound)?;
    debug!(bytes = yaml.len(), "Located commit data block");

    let value = parse_yaml(yaml).map_err(CommitMessageError::InvalidYaml)?;

    COMMIT_DATA
        .validate_into(value)
        .map_err(CommitMessageError::InvalidCommitData)
}

/// Extracts the declared dependencies, in declaration order.
pub fn extract_updated_dependencies(
    message: &str,
) -> Result<Vec<DependencyDeclaration>, CommitMessageError> {
    extract_commit_data(message).map(|data| data.updated_dependencies)
}

/// Parses a Dependabot commit message.
///
/// Update types declared in the YAML block are kept as is. Missing ones are
/// inferred from the message prose where possible.
pub fn parse_commit_message(message: &str) -> Result<ParsedCommitMessage, CommitMessageError> {
    let declared = extract_updated_dependencies(message)?;

    let names: Vec<&str> = declared.iter().map(|d| d.name.as_str()).collect();
    let inferred = infer_update_types(message, &names);

    let updated_dependencies: Vec<UpdatedDependency> = declared
        .into_iter()
        .zip(inferred)
        .map(|(declaration, inferred)| UpdatedDependency {
            update_type: declaration.update_type.or(inferred),
            dependency_name: declaration.name,
            dependency_type: declaration.dependency_type,
        })
        .collect();

    debug!(
        dependencies = updated_dependencies.len(),
        "Parsed commit message"
    );

    Ok(ParsedCommitMessage {
        updated_dependencies,
    })
}
