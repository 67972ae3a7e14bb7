//! Branch name parsing.
//!
//! Dependabot names its branches `dependabot/<ecosystem>/<directory...>/<tail>`,
//! where the tail is derived from the dependency names and may itself contain
//! slashes. The directory is whatever is left once the ecosystem and the tail
//! are removed. The tail length is estimated from the dependency names.

use tracing::debug;

use crate::data::ParsedBranch;
use crate::dependabot::error::BranchNameError;

const BRANCH_PREFIX: &str = "dependabot";

/// Determines the ecosystem and directory encoded in a Dependabot branch name.
///
/// `dependencies` are the updated dependency names, in declaration order.
pub fn parse_branch_name<S: AsRef<str>>(
    dependencies: &[S],
    branch: &str,
) -> Result<ParsedBranch, BranchNameError> {
    let first = dependencies
        .first()
        .ok_or(BranchNameError::EmptyDependencies)?
        .as_ref();

    if !branch.starts_with(BRANCH_PREFIX) {
        return Err(BranchNameError::NotDependabot {
            branch: branch.to_string(),
        });
    }

    let parts: Vec<&str> = branch.split('/').collect();
    let ecosystem = parts
        .get(1)
        .copied()
        .ok_or_else(|| BranchNameError::MissingEcosystem {
            branch: branch.to_string(),
        })?;

    let tail_segments = tail_segment_count(first, dependencies.len());
    let end = parts.len().saturating_sub(1 + tail_segments);
    // Empty segments from doubled slashes are dropped so the directory never
    // ends with a slash.
    let segments: Vec<&str> = parts
        .get(2..end)
        .unwrap_or_default()
        .iter()
        .copied()
        .filter(|s| !s.is_empty())
        .collect();
    let directory = format!("/{}", segments.join("/"));

    debug!(
        branch,
        ecosystem,
        directory = directory.as_str(),
        tail_segments,
        "Segmented branch name"
    );

    Ok(ParsedBranch {
        ecosystem: ecosystem.to_string(),
        directory,
    })
}

/// Number of segments beyond the last one that belong to the dependency tail.
///
/// Each slash in the first dependency name adds one. Grouped updates get an
/// extra segment for the combined group name.
fn tail_segment_count(first_dependency: &str, dependency_count: usize) -> usize {
    let slashes = first_dependency.matches('/').count();
    if dependency_count > 1 {
        slashes + 1
    } else {
        slashes
    }
}
