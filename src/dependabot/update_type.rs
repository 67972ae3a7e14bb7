//! Update type inference from commit message prose.
//!
//! Older Dependabot messages omit `update-type` from the YAML block and only
//! describe version changes in prose. Each recognised phrase is matched in
//! document order and the n-th match is attributed to the n-th declared
//! dependency. The attribution is positional: the prose is assumed to mention
//! dependencies in the order the YAML block declares them.

use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::{Captures, Regex};
use semver::Version;
use tracing::trace;

use crate::data::UpdateType;

// One alternative per known phrasing:
// - "Removes `name`"
// - "Updates `name` from x to y" / "Bumps [name](...) from x to y."
// - "Updates the requirements on ..." followed by a "[Commits](.../compare/x...y)" bullet
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static UPDATE_TYPE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?mR)^(?P<removes>Removes `.*`)$",
        r"|^(?:Updates `.*`|Bumps \[.*) from (?P<from>.*) to (?P<to>.*?)\.?$",
        r"|^Updates the requirements on .*(?:[\r\n]+- .*)*[\r\n]- \[Commits\].*/compare/(?P<requirement_from>.*)\.{3}(?P<requirement_to>.*)\)$",
    ))
    .unwrap()
});

/// What a single recognised phrase says about an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateEvidence {
    /// The dependency was removed.
    Removal,
    /// The dependency moved between two version strings.
    VersionChange {
        /// Version before the update.
        from: String,
        /// Version after the update.
        to: String,
    },
    /// The phrase matched but carried nothing usable.
    Inconclusive,
}

impl UpdateEvidence {
    fn from_captures(captures: &Captures<'_>) -> Self {
        let group = |name: &str| {
            captures
                .name(name)
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty())
        };

        if group("removes").is_some() {
            return Self::Removal;
        }

        if let (Some(from), Some(to)) = (group("from"), group("to")) {
            return Self::VersionChange {
                from: from.to_string(),
                to: to.to_string(),
            };
        }

        if let (Some(from), Some(to)) = (group("requirement_from"), group("requirement_to")) {
            // Compare links carry URL-encoded versions.
            if let (Some(from), Some(to)) = (decode_component(from), decode_component(to)) {
                return Self::VersionChange { from, to };
            }
        }

        Self::Inconclusive
    }

    /// Classifies the evidence, if it is conclusive.
    pub fn update_type(&self) -> Option<UpdateType> {
        match self {
            Self::Removal => Some(UpdateType::Removal),
            Self::VersionChange { from, to } => determine_update_type(from, to),
            Self::Inconclusive => None,
        }
    }
}

/// Scans a commit message for update phrases, in document order.
///
/// Every call starts a fresh scan; nothing is shared between calls.
pub fn update_evidence(message: &str) -> impl Iterator<Item = UpdateEvidence> + '_ {
    UPDATE_TYPE_PATTERN
        .captures_iter(message)
        .map(|captures| UpdateEvidence::from_captures(&captures))
}

/// Infers an update type for each dependency from the message prose.
///
/// The result has the same length and order as `dependency_names`. A
/// dependency without a corresponding phrase, or whose versions are not
/// valid semver, gets `None`.
pub fn infer_update_types<S: AsRef<str>>(
    message: &str,
    dependency_names: &[S],
) -> Vec<Option<UpdateType>> {
    let mut evidence = update_evidence(message);

    dependency_names
        .iter()
        .map(|name| {
            evidence.next().and_then(|e| {
                trace!(dependency = name.as_ref(), evidence = ?e, "Correlated update phrase");
                e.update_type()
            })
        })
        .collect()
}

/// Classifies the change between two semver strings.
///
/// Returns the most significant component that increased, or `None` when
/// either string is not semver or nothing increased.
pub fn determine_update_type(from: &str, to: &str) -> Option<UpdateType> {
    let from = parse_version(from)?;
    let to = parse_version(to)?;

    if to.major > from.major {
        Some(UpdateType::SemverMajor)
    } else if to.minor > from.minor {
        Some(UpdateType::SemverMinor)
    } else if to.patch > from.patch {
        Some(UpdateType::SemverPatch)
    } else {
        None
    }
}

/// Parses strict semver, tolerating a single leading `v`.
fn parse_version(s: &str) -> Option<Version> {
    Version::parse(s.strip_prefix('v').unwrap_or(s)).ok()
}

/// Percent-decodes a URI component. `+` is left as is.
fn decode_component(s: &str) -> Option<String> {
    percent_decode_str(s)
        .decode_utf8()
        .ok()
        .map(std::borrow::Cow::into_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── determine_update_type ────────────────────────────────────────

    #[test]
    fn classifies_minor() {
        assert_eq!(
            determine_update_type("4.0.1", "4.2.2"),
            Some(UpdateType::SemverMinor)
        );
    }

    #[test]
    fn classifies_patch() {
        assert_eq!(
            determine_update_type("4.0.1", "4.0.2"),
            Some(UpdateType::SemverPatch)
        );
    }

    #[test]
    fn classifies_major() {
        assert_eq!(
            determine_update_type("4.0.1", "5.0.0"),
            Some(UpdateType::SemverMajor)
        );
    }

    #[test]
    fn equal_versions_are_unknown() {
        assert_eq!(determine_update_type("4.0.1", "4.0.1"), None);
    }

    #[test]
    fn accepts_v_prefix_and_prerelease() {
        assert_eq!(
            determine_update_type("v1.2.3-beta.1+build.5", "v1.3.0"),
            Some(UpdateType::SemverMinor)
        );
    }

    #[test]
    fn non_semver_is_unknown() {
        assert_eq!(determine_update_type("1.2", "1.3"), None);
        assert_eq!(determine_update_type("01.2.3", "1.2.4"), None);
        assert_eq!(determine_update_type("1.2.3", "latest"), None);
        assert_eq!(determine_update_type("vv1.2.3", "1.2.4"), None);
    }

    #[test]
    fn first_increased_component_wins() {
        // The major went down but the minor went up.
        assert_eq!(
            determine_update_type("2.5.0", "1.6.0"),
            Some(UpdateType::SemverMinor)
        );
        assert_eq!(determine_update_type("2.0.0", "1.0.0"), None);
    }

    // ── update_evidence ──────────────────────────────────────────────

    #[test]
    fn bumps_phrase_strips_trailing_period() {
        let evidence: Vec<_> = update_evidence(
            "Bumps [coffee-rails](https://github.com/rails/coffee-rails) from 4.0.1 to 4.2.2.\n",
        )
        .collect();
        assert_eq!(
            evidence,
            [UpdateEvidence::VersionChange {
                from: "4.0.1".to_string(),
                to: "4.2.2".to_string(),
            }]
        );
    }

    #[test]
    fn removes_phrase() {
        let evidence: Vec<_> = update_evidence("Removes `left-pad`\n").collect();
        assert_eq!(evidence, [UpdateEvidence::Removal]);
    }

    #[test]
    fn requirements_phrase_decodes_compare_link() {
        let message = "Updates the requirements on [rubocop](https://github.com/rubocop/rubocop) to permit the latest version.\n\
                       - [Release notes](https://github.com/rubocop/rubocop/releases)\n\
                       - [Commits](https://github.com/rubocop/rubocop/compare/v1.0.0%2Bold...v2.1.0)\n";
        let evidence: Vec<_> = update_evidence(message).collect();
        assert_eq!(
            evidence,
            [UpdateEvidence::VersionChange {
                from: "v1.0.0+old".to_string(),
                to: "v2.1.0".to_string(),
            }]
        );
        assert_eq!(evidence[0].update_type(), Some(UpdateType::SemverMajor));
    }

    #[test]
    fn phrases_must_start_a_line() {
        assert_eq!(update_evidence("See: Bumps [x](y) from 1.0.0 to 1.0.1").count(), 0);
    }

    #[test]
    fn crlf_line_endings_are_line_breaks() {
        let evidence: Vec<_> =
            update_evidence("Updates `jest` from 29.3.1 to 29.4.2\r\n- [Commits](x)\r\n").collect();
        assert_eq!(
            evidence,
            [UpdateEvidence::VersionChange {
                from: "29.3.1".to_string(),
                to: "29.4.2".to_string(),
            }]
        );
    }

    // ── infer_update_types ───────────────────────────────────────────

    #[test]
    fn correlates_by_position() {
        let message = "Updates `@types/jest` from 29.2.5 to 29.4.0\n\
                       - [Commits](https://example.com)\n\
                       \n\
                       Updates `jest` from 29.3.1 to 30.0.0\n\
                       \n\
                       Removes `jest-cli`\n";
        assert_eq!(
            infer_update_types(message, &["@types/jest", "jest", "jest-cli"]),
            [
                Some(UpdateType::SemverMinor),
                Some(UpdateType::SemverMajor),
                Some(UpdateType::Removal),
            ]
        );
    }

    #[test]
    fn missing_phrases_leave_gaps() {
        assert_eq!(
            infer_update_types("Bumps [a](b) from 1.0.0 to 1.0.1.", &["a", "c"]),
            [Some(UpdateType::SemverPatch), None]
        );
        assert!(infer_update_types::<&str>("anything", &[]).is_empty());
    }

    #[test]
    fn each_call_scans_afresh() {
        let message = "Bumps [a](b) from 1.0.0 to 2.0.0.";
        let first = infer_update_types(message, &["a"]);
        let second = infer_update_types(message, &["a"]);
        assert_eq!(first, second);
        assert_eq!(first, [Some(UpdateType::SemverMajor)]);
    }

    // ── property tests ────────────────────────────────────────────

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn output_matches_input_length(
                message in ".{0,200}",
                names in proptest::collection::vec("[a-z@/-]{1,12}", 0..6),
            ) {
                prop_assert_eq!(infer_update_types(&message, &names).len(), names.len());
            }

            #[test]
            fn equal_versions_never_classify(
                major in 0_u64..1000,
                minor in 0_u64..1000,
                patch in 0_u64..1000,
            ) {
                let v = format!("{major}.{minor}.{patch}");
                prop_assert_eq!(determine_update_type(&v, &v), None);
            }

            #[test]
            fn patch_bump_classifies_as_patch(
                major in 0_u64..1000,
                minor in 0_u64..1000,
                patch in 0_u64..1000,
            ) {
                let from = format!("{major}.{minor}.{patch}");
                let to = format!("{major}.{minor}.{}", patch + 1);
                prop_assert_eq!(determine_update_type(&from, &to), Some(UpdateType::SemverPatch));
            }
        }
    }
}
