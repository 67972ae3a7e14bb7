//! Parsing of a bare commit-message YAML fragment.

use serde::Deserialize;

use crate::data::schema::YAML_FRAGMENT;
use crate::data::{parse_yaml, DependencyDeclaration, DependencyType};
use crate::dependabot::error::CommitYamlError;

#[derive(Deserialize)]
struct Fragment {
    #[serde(rename = "updated-dependencies")]
    updated_dependencies: Vec<FragmentDependency>,
}

#[derive(Deserialize)]
struct FragmentDependency {
    #[serde(rename = "dependency-name")]
    name: String,
    #[serde(rename = "dependency-type")]
    dependency_type: DependencyType,
}

/// Parses the YAML found between the `---` and `...` delimiters.
///
/// Only names and types are read; any `update-type` is ignored.
pub fn parse_commit_yaml(yaml: &str) -> Result<Vec<DependencyDeclaration>, CommitYamlError> {
    let value = parse_yaml(yaml).map_err(CommitYamlError::InvalidYaml)?;
    let fragment: Fragment = YAML_FRAGMENT
        .validate_into(value)
        .map_err(CommitYamlError::InvalidFragment)?;

    Ok(fragment
        .updated_dependencies
        .into_iter()
        .map(|d| DependencyDeclaration {
            name: d.name,
            dependency_type: d.dependency_type,
            update_type: None,
        })
        .collect())
}
