//! Untyped stack documents
//!
//! A stack document is a nested key/value tree supplied by the hosting
//! environment. Its top-level keys are namespaced per project as
//! `<identity>:<field>`; keys under foreign namespaces belong to other
//! tools and are ignored. The document is never mutated after load.

use serde_yaml::{Mapping, Value};

use crate::error::ConfigurationError;
use crate::project::ProjectIdentity;

/// An untyped, namespaced configuration tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    root: Mapping,
}

impl ConfigDocument {
    /// Build a document from a parsed YAML value.
    ///
    /// Stack files wrap the namespaced keys in a `config` section next
    /// to bookkeeping scalars (e.g. an encryption salt); when such a
    /// section is present it becomes the document root. A bare mapping
    /// of namespaced keys is accepted as-is.
    pub fn from_value(value: Value) -> Result<Self, ConfigurationError> {
        match value {
            Value::Mapping(mut root) => {
                if let Some(section) = root.remove("config") {
                    return match section {
                        Value::Mapping(section) => Ok(Self { root: section }),
                        other => Err(ConfigurationError::TypeMismatch {
                            path: "config".to_string(),
                            expected: "mapping".to_string(),
                            actual: value_shape(&other).to_string(),
                        }),
                    };
                }
                Ok(Self { root })
            }
            other => Err(ConfigurationError::TypeMismatch {
                path: String::new(),
                expected: "mapping".to_string(),
                actual: value_shape(&other).to_string(),
            }),
        }
    }

    /// Parse a document from YAML text.
    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigurationError> {
        let value: Value =
            serde_yaml::from_str(raw).map_err(|err| ConfigurationError::ParseError {
                details: err.to_string(),
            })?;
        Self::from_value(value)
    }

    /// De-alias the document for one project.
    ///
    /// Builds the explicit key table at resolution time: every root key
    /// of the form `<identity>:<field>` contributes `<field>`; keys in
    /// other namespaces are skipped.
    pub fn namespaced_section(&self, project: &ProjectIdentity) -> Mapping {
        let prefix = format!("{project}:");
        let mut section = Mapping::new();

        for (key, value) in &self.root {
            if let Some(field) = key.as_str().and_then(|key| key.strip_prefix(&prefix)) {
                section.insert(Value::String(field.to_string()), value.clone());
            }
        }

        section
    }
}

/// Human-readable shape of a YAML value, for diagnostics.
pub fn value_shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::resolve_project_identity;
    use std::path::Path;

    fn identity() -> ProjectIdentity {
        resolve_project_identity(Path::new("/srv/deploy-myproj")).unwrap()
    }

    #[test]
    fn test_namespaced_section_strips_prefix() {
        let document = ConfigDocument::from_yaml_str(
            "myproj:redis:\n  version: \"7.2\"\nmyproj:mail:\n  server: smtp.example.com\n",
        )
        .unwrap();

        let section = document.namespaced_section(&identity());
        assert_eq!(section.len(), 2);
        assert!(section.contains_key("redis"));
        assert!(section.contains_key("mail"));
    }

    #[test]
    fn test_foreign_namespaces_are_ignored() {
        let document = ConfigDocument::from_yaml_str(
            "myproj:redis:\n  version: \"7.2\"\nkubernetes:context: prod\n",
        )
        .unwrap();

        let section = document.namespaced_section(&identity());
        assert_eq!(section.len(), 1);
        assert!(section.contains_key("redis"));
    }

    #[test]
    fn test_config_section_unwrapping() {
        let document = ConfigDocument::from_yaml_str(
            "encryptionsalt: v1:abcdef\nconfig:\n  myproj:redis:\n    version: \"7.2\"\n",
        )
        .unwrap();

        let section = document.namespaced_section(&identity());
        assert!(section.contains_key("redis"));
    }

    #[test]
    fn test_scalar_document_is_a_type_mismatch() {
        let err = ConfigDocument::from_yaml_str("42\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::TypeMismatch { ref expected, .. } if expected == "mapping"
        ));
    }
}
