//! Stack document loading and typed extraction
//!
//! Loading reads the YAML stack document into an untyped
//! [`ConfigDocument`]. Extraction turns a de-aliased section into a
//! typed configuration through figment, translating figment's error
//! kinds into the resolution taxonomy with dotted field paths.

use std::fs;
use std::path::Path;

use figment::error::Kind;
use figment::providers::Serialized;
use figment::Figment;
use serde::de::DeserializeOwned;
use serde_yaml::Mapping;
use tracing::{debug, info};

use crate::error::ConfigurationError;
use crate::secrets::is_secret_format_message;

use super::document::ConfigDocument;

/// Load a stack document from a YAML file.
///
/// # Errors
/// * [`ConfigurationError::FileNotFound`] when the path does not exist
/// * [`ConfigurationError::ReadError`] when the file cannot be read
/// * [`ConfigurationError::ParseError`] when the content is not YAML
pub fn load_document(path: &Path) -> Result<ConfigDocument, ConfigurationError> {
    if !path.exists() {
        return Err(ConfigurationError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    info!("Loading stack document from {}", path.display());
    let raw = fs::read_to_string(path).map_err(|err| ConfigurationError::ReadError {
        path: path.display().to_string(),
        source: Box::new(err),
    })?;

    let document = ConfigDocument::from_yaml_str(&raw)?;
    debug!("Stack document loaded from {}", path.display());
    Ok(document)
}

/// Extract a typed configuration from a de-aliased document section.
///
/// The extraction is a pure transform: identical sections always yield
/// identical configurations or identical failures. Shape errors are
/// translated so the caller sees the dotted path of the offending field
/// rather than a figment internal message.
pub fn extract_section<T>(section: Mapping) -> Result<T, ConfigurationError>
where
    T: DeserializeOwned,
{
    Figment::from(Serialized::defaults(section))
        .extract::<T>()
        .map_err(translate_extraction_error)
}

fn translate_extraction_error(error: figment::Error) -> ConfigurationError {
    // Resolution is atomic, so the first error is the diagnostic.
    let Some(error) = error.into_iter().next() else {
        return ConfigurationError::ParseError {
            details: "configuration extraction failed".to_string(),
        };
    };

    let path = error.path.join(".");
    match error.kind {
        Kind::MissingField(name) => ConfigurationError::MissingField {
            path: if path.is_empty() {
                name.into_owned()
            } else {
                format!("{path}.{name}")
            },
        },
        Kind::InvalidType(actual, expected) => ConfigurationError::TypeMismatch {
            path,
            expected,
            actual: actual.to_string(),
        },
        Kind::Message(details) if is_secret_format_message(&details) => {
            ConfigurationError::SecretFormat { path, details }
        }
        other => ConfigurationError::ParseError {
            details: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        #[serde(default)]
        replicas: Option<u32>,
    }

    fn section(raw: &str) -> Mapping {
        serde_yaml::from_str(raw).unwrap()
    }

    #[test]
    fn test_extract_section_round_trip() {
        let sample: Sample = extract_section(section("name: redis\nreplicas: 3\n")).unwrap();
        assert_eq!(
            sample,
            Sample {
                name: "redis".to_string(),
                replicas: Some(3),
            }
        );
    }

    #[test]
    fn test_missing_field_names_the_field() {
        let err = extract_section::<Sample>(section("replicas: 3\n")).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::MissingField { ref path } if path == "name"
        ));
    }

    #[test]
    fn test_type_mismatch_reports_shapes() {
        let err = extract_section::<Sample>(section("name: redis\nreplicas: lots\n")).unwrap_err();
        match err {
            ConfigurationError::TypeMismatch { path, .. } => assert_eq!(path, "replicas"),
            other => panic!("expected type mismatch, got {other}"),
        }
    }

    #[test]
    fn test_load_document_missing_file() {
        let err = load_document(Path::new("/nonexistent/stack.yaml")).unwrap_err();
        assert!(matches!(err, ConfigurationError::FileNotFound { .. }));
    }

    #[test]
    fn test_load_document_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "myproj:redis:\n  version: \"7.2\"").unwrap();

        let document = load_document(file.path()).unwrap();
        let expected = ConfigDocument::from_yaml_str("myproj:redis:\n  version: \"7.2\"\n").unwrap();
        assert_eq!(document, expected);
    }
}
