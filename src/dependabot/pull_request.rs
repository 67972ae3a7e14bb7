//! Pull request assembly from a branch name and its first commit message.

use tracing::debug;

use crate::data::ParsedPullRequest;
use crate::dependabot::branch::parse_branch_name;
use crate::dependabot::commit_message::parse_commit_message;
use crate::dependabot::error::PullRequestError;

/// Parses a Dependabot pull request.
///
/// The commit message supplies the dependency list, which in turn guides
/// segmentation of the branch name.
pub fn parse_pull_request(
    branch: &str,
    commit_message: &str,
) -> Result<ParsedPullRequest, PullRequestError> {
    let parsed = parse_commit_message(commit_message)?;
    if parsed.updated_dependencies.is_empty() {
        return Err(PullRequestError::NoUpdatedDependencies);
    }

    let names: Vec<&str> = parsed
        .updated_dependencies
        .iter()
        .map(|d| d.dependency_name.as_str())
        .collect();
    let branch = parse_branch_name(&names, branch)?;

    debug!(
        ecosystem = branch.ecosystem.as_str(),
        directory = branch.directory.as_str(),
        dependencies = names.len(),
        "Parsed pull request"
    );

    Ok(ParsedPullRequest {
        ecosystem: branch.ecosystem,
        directory: branch.directory,
        updated_dependencies: parsed.updated_dependencies,
    })
}
