//! Structured Dependabot metadata and serialization helpers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod schema;
pub mod yaml;

pub use schema::{SchemaError, Violation};
pub use yaml::{parse_yaml, to_yaml, YamlError};

/// How a dependency relates to the project it was updated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DependencyType {
    /// A direct dependency used at runtime.
    #[serde(rename = "direct:production")]
    DirectProduction,
    /// A direct dependency used only for development.
    #[serde(rename = "direct:development")]
    DirectDevelopment,
    /// A transitive dependency.
    #[serde(rename = "indirect")]
    Indirect,
}

impl DependencyType {
    /// Every dependency type, in wire order.
    pub const ALL: [Self; 3] = [
        Self::DirectProduction,
        Self::DirectDevelopment,
        Self::Indirect,
    ];

    /// Returns the wire string used in Dependabot commit messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DirectProduction => "direct:production",
            Self::DirectDevelopment => "direct:development",
            Self::Indirect => "indirect",
        }
    }
}

impl fmt::Display for DependencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DependencyType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// Semantic-version significance of an update, or removal of the dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpdateType {
    /// The major version was increased.
    #[serde(rename = "version-update:semver-major")]
    SemverMajor,
    /// The minor version was increased.
    #[serde(rename = "version-update:semver-minor")]
    SemverMinor,
    /// The patch version was increased.
    #[serde(rename = "version-update:semver-patch")]
    SemverPatch,
    /// The dependency was removed.
    #[serde(rename = "removal")]
    Removal,
}

impl UpdateType {
    /// The update types a commit message may declare explicitly.
    pub const DECLARABLE: [Self; 3] = [Self::SemverMajor, Self::SemverMinor, Self::SemverPatch];

    /// Returns the wire string used in Dependabot commit messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SemverMajor => "version-update:semver-major",
            Self::SemverMinor => "version-update:semver-minor",
            Self::SemverPatch => "version-update:semver-patch",
            Self::Removal => "removal",
        }
    }
}

impl fmt::Display for UpdateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpdateType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Self::SemverMajor,
            Self::SemverMinor,
            Self::SemverPatch,
            Self::Removal,
        ]
        .into_iter()
        .find(|t| t.as_str() == s)
        .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// A wire string that names no known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown variant {0:?}")]
pub struct UnknownVariant(pub String);

/// One entry of the `updated-dependencies` list, as declared in the YAML block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyDeclaration {
    /// Name of the dependency.
    #[serde(rename = "dependency-name")]
    pub name: String,
    /// How the dependency relates to the project.
    #[serde(rename = "dependency-type")]
    pub dependency_type: DependencyType,
    /// Update type, when the bot declared one.
    #[serde(
        rename = "update-type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub update_type: Option<UpdateType>,
}

/// The validated contents of a commit message's YAML block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitData {
    /// Dependencies in declaration order.
    #[serde(rename = "updated-dependencies")]
    pub updated_dependencies: Vec<DependencyDeclaration>,
}

/// A dependency updated by a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedDependency {
    /// Name of the dependency.
    pub dependency_name: String,
    /// How the dependency relates to the project.
    pub dependency_type: DependencyType,
    /// Update type, declared or inferred. `None` when it cannot be determined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_type: Option<UpdateType>,
}

/// Ecosystem and directory recovered from a branch name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedBranch {
    /// Package ecosystem, e.g. `npm_and_yarn`.
    pub ecosystem: String,
    /// Directory of the updated manifest, always starting with `/`.
    pub directory: String,
}

/// Dependencies recovered from a commit message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCommitMessage {
    /// Dependencies in declaration order.
    pub updated_dependencies: Vec<UpdatedDependency>,
}

/// Everything known about a Dependabot pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedPullRequest {
    /// Package ecosystem, e.g. `npm_and_yarn`.
    pub ecosystem: String,
    /// Directory of the updated manifest, always starting with `/`.
    pub directory: String,
    /// Dependencies in declaration order.
    pub updated_dependencies: Vec<UpdatedDependency>,
}
