//! Shape validation for the YAML block embedded in Dependabot commit messages.
//!
//! The schemas are declarative constants. Validation walks an untyped
//! [`serde_yaml::Value`] and accumulates every violation, each annotated
//! with a JSON pointer to the offending value. Messages follow the wording
//! families of common JSON Schema validators (`must be object`,
//! `must have required property 'x'`, ...) so reports stay comparable with
//! existing fixture corpora.

use std::fmt;

use serde::de::DeserializeOwned;
use serde_yaml::Value;
use thiserror::Error;
use tracing::debug;

use crate::data::{DependencyType, UpdateType};

/// Key holding the list of updated dependencies.
pub const UPDATED_DEPENDENCIES: &str = "updated-dependencies";

const DEPENDENCY_TYPES: [&str; DependencyType::ALL.len()] = {
    let mut names = [""; DependencyType::ALL.len()];
    let mut i = 0;
    while i < names.len() {
        names[i] = DependencyType::ALL[i].as_str();
        i += 1;
    }
    names
};

// `removal` is inferred only, never declared.
const UPDATE_TYPES: [&str; UpdateType::DECLARABLE.len()] = {
    let mut names = [""; UpdateType::DECLARABLE.len()];
    let mut i = 0;
    while i < names.len() {
        names[i] = UpdateType::DECLARABLE[i].as_str();
        i += 1;
    }
    names
};

const DEPENDENCY_NAME: StringField = StringField {
    name: "dependency-name",
    required: true,
    min_length: Some(1),
    one_of: None,
};

const DEPENDENCY_TYPE: StringField = StringField {
    name: "dependency-type",
    required: true,
    min_length: None,
    one_of: Some(&DEPENDENCY_TYPES),
};

const UPDATE_TYPE: StringField = StringField {
    name: "update-type",
    required: false,
    min_length: None,
    one_of: Some(&UPDATE_TYPES),
};

/// Bare YAML fragment: dependency names and types only.
pub static YAML_FRAGMENT: Schema = Schema {
    subject: "YAML fragment",
    item_fields: &[DEPENDENCY_NAME, DEPENDENCY_TYPE],
};

/// Commit data block: dependency names, types and optional update types.
pub static COMMIT_DATA: Schema = Schema {
    subject: "commit data",
    item_fields: &[DEPENDENCY_NAME, DEPENDENCY_TYPE, UPDATE_TYPE],
};

/// A string property of an `updated-dependencies` item.
#[derive(Debug, Clone, Copy)]
pub struct StringField {
    /// Property key.
    pub name: &'static str,
    /// Whether the property must be present.
    pub required: bool,
    /// Minimum length in characters.
    pub min_length: Option<usize>,
    /// Allowed values.
    pub one_of: Option<&'static [&'static str]>,
}

/// An object with a required `updated-dependencies` array of objects.
#[derive(Debug)]
pub struct Schema {
    /// What the validated document is called in error reports.
    pub subject: &'static str,
    /// Properties of each array item, in evaluation order.
    pub item_fields: &'static [StringField],
}

/// A single schema violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Human-readable description, e.g. `must be string`.
    pub message: String,
    /// JSON pointer to the offending value, absent at the document root.
    pub pointer: Option<String>,
}

impl Violation {
    fn at(pointer: &str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            pointer: (!pointer.is_empty()).then(|| pointer.to_string()),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pointer {
            Some(pointer) => write!(f, "{} ({pointer})", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Every violation found while validating one document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {subject}:{}", render_violations(.violations))]
pub struct SchemaError {
    /// What the validated document is called.
    pub subject: &'static str,
    /// Violations in evaluation order. Never empty.
    pub violations: Vec<Violation>,
}

fn render_violations(violations: &[Violation]) -> String {
    violations.iter().map(|v| format!("\n  - {v}")).collect()
}

impl Schema {
    /// Validates a document, reporting every violation.
    pub fn validate(&self, value: &Value) -> Result<(), SchemaError> {
        let mut violations = Vec::new();
        self.check_document(value, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            debug!(
                subject = self.subject,
                count = violations.len(),
                "Schema validation failed"
            );
            Err(SchemaError {
                subject: self.subject,
                violations,
            })
        }
    }

    /// Validates a document and converts it into its typed form.
    pub fn validate_into<T: DeserializeOwned>(&self, value: Value) -> Result<T, SchemaError> {
        self.validate(&value)?;

        serde_yaml::from_value(value).map_err(|e| SchemaError {
            subject: self.subject,
            violations: vec![Violation::at("", e.to_string())],
        })
    }

    fn check_document(&self, value: &Value, violations: &mut Vec<Violation>) {
        let Value::Mapping(document) = value else {
            violations.push(Violation::at("", "must be object"));
            return;
        };

        let Some(list) = document.get(UPDATED_DEPENDENCIES) else {
            violations.push(Violation::at(
                "",
                format!("must have required property '{UPDATED_DEPENDENCIES}'"),
            ));
            return;
        };

        let list_pointer = child_pointer("", UPDATED_DEPENDENCIES);
        let Value::Sequence(items) = list else {
            violations.push(Violation::at(&list_pointer, "must be array"));
            return;
        };

        for (index, item) in items.iter().enumerate() {
            let item_pointer = child_pointer(&list_pointer, &index.to_string());
            self.check_item(item, &item_pointer, violations);
        }
    }

    fn check_item(&self, item: &Value, pointer: &str, violations: &mut Vec<Violation>) {
        let Value::Mapping(item) = item else {
            violations.push(Violation::at(pointer, "must be object"));
            return;
        };

        for field in self.item_fields.iter().filter(|f| f.required) {
            if item.get(field.name).is_none() {
                violations.push(Violation::at(
                    pointer,
                    format!("must have required property '{}'", field.name),
                ));
            }
        }

        for field in self.item_fields {
            if let Some(value) = item.get(field.name) {
                field.check(value, &child_pointer(pointer, field.name), violations);
            }
        }
    }
}

impl StringField {
    fn check(&self, value: &Value, pointer: &str, violations: &mut Vec<Violation>) {
        let string = value.as_str();

        if string.is_none() {
            violations.push(Violation::at(pointer, "must be string"));
        }

        if let Some(allowed) = self.one_of {
            if !string.is_some_and(|s| allowed.contains(&s)) {
                violations.push(Violation::at(
                    pointer,
                    format!("must be one of {}", quoted_list(allowed)),
                ));
            }
        }

        if let (Some(s), Some(min)) = (string, self.min_length) {
            if s.chars().count() < min {
                violations.push(Violation::at(
                    pointer,
                    format!("must NOT have fewer than {min} characters"),
                ));
            }
        }
    }
}

fn quoted_list(values: &[&str]) -> String {
    values
        .iter()
        .map(|v| crate::data::yaml::json_quote(v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Appends an escaped reference token to a JSON pointer.
fn child_pointer(parent: &str, token: &str) -> String {
    format!("{parent}/{}", token.replace('~', "~0").replace('/', "~1"))
}
