//! Secret-holding configuration values
//!
//! Credential fields in the stack document come in two forms: a plain
//! string, or a reference to an external secret store written as
//! `{ref: "<uri>"}`. Both normalize into [`SecretValue`], which refuses
//! to render its content. The unredacted value is reached only through
//! [`SecretValue::expose`], at the point where declarative output for
//! the provisioning tool is built.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Fixed redaction emitted by `Debug`, `Display`, and `Serialize`.
pub const REDACTED: &str = "[redacted]";

const SECRET_FORMAT_HINT: &str =
    "a plain string or a secret reference of the form `{ref: \"<uri>\"}`";

/// A sensitive configuration value.
///
/// Either a literal secret supplied inline, or a reference the
/// downstream provisioning tool resolves against its secret store.
#[derive(Clone, PartialEq, Eq)]
pub enum SecretValue {
    /// Literal secret material
    Plain(String),
    /// Pointer into an external secret store (e.g. an `op://` URI)
    Reference(String),
}

impl SecretValue {
    /// Wrap literal secret material.
    pub fn plain(value: impl Into<String>) -> Self {
        Self::Plain(value.into())
    }

    /// Wrap a secret-store reference.
    pub fn reference(uri: impl Into<String>) -> Self {
        Self::Reference(uri.into())
    }

    /// Unwrap the value for declarative output.
    ///
    /// For a plain secret this is the secret material itself; for a
    /// reference it is the reference URI, which the provisioning tool
    /// resolves. Call this only when building output destined for the
    /// provisioning tool.
    pub fn expose(&self) -> &str {
        match self {
            Self::Plain(value) => value,
            Self::Reference(uri) => uri,
        }
    }

    /// Whether this value still needs resolution by the secret store.
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(_))
    }
}

impl fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(_) => write!(f, "SecretValue::Plain({REDACTED})"),
            Self::Reference(uri) => write!(f, "SecretValue::Reference({uri})"),
        }
    }
}

impl fmt::Display for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl Serialize for SecretValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Plain secrets serialize redacted; rendering a config for
            // operators must never leak the material.
            Self::Plain(_) => serializer.serialize_str(REDACTED),
            Self::Reference(uri) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("ref", uri)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for SecretValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SecretVisitor;

        impl<'de> Visitor<'de> for SecretVisitor {
            type Value = SecretValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(SECRET_FORMAT_HINT)
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(SecretValue::Plain(value.to_string()))
            }

            fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
                Ok(SecretValue::Plain(value))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut reference = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key == "ref" {
                        reference = Some(map.next_value::<String>()?);
                    } else {
                        return Err(de::Error::custom(format!(
                            "unknown secret key `{key}`, expected {SECRET_FORMAT_HINT}"
                        )));
                    }
                }
                reference.map(SecretValue::Reference).ok_or_else(|| {
                    de::Error::custom(format!("expected {SECRET_FORMAT_HINT}"))
                })
            }
        }

        deserializer.deserialize_any(SecretVisitor)
    }
}

/// Whether a deserialization failure message came from [`SecretValue`].
///
/// Used by the extraction layer to classify errors into the secret
/// taxonomy instead of a generic parse failure.
pub(crate) fn is_secret_format_message(message: &str) -> bool {
    message.contains("secret reference")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_secret_never_renders_material() {
        let secret = SecretValue::plain("hunter2");

        assert_eq!(secret.to_string(), REDACTED);
        assert!(!format!("{secret:?}").contains("hunter2"));
        assert_eq!(serde_json::to_value(&secret).unwrap(), REDACTED);
        assert_eq!(secret.expose(), "hunter2");
    }

    #[test]
    fn test_reference_round_trips_through_serde() {
        let secret = SecretValue::reference("op://vault/item/password");
        let rendered = serde_json::to_value(&secret).unwrap();

        assert_eq!(rendered["ref"], "op://vault/item/password");
        let back: SecretValue = serde_json::from_value(rendered).unwrap();
        assert_eq!(back, secret);
        assert!(back.is_reference());
    }

    #[test]
    fn test_plain_string_deserializes_as_plain() {
        let secret: SecretValue = serde_json::from_str("\"s3cret\"").unwrap();
        assert_eq!(secret, SecretValue::plain("s3cret"));
        assert!(!secret.is_reference());
    }

    #[test]
    fn test_unrecognized_map_is_rejected() {
        let err = serde_json::from_str::<SecretValue>("{\"secure\": \"abc\"}").unwrap_err();
        assert!(is_secret_format_message(&err.to_string()));
    }

    #[test]
    fn test_empty_map_is_rejected() {
        let err = serde_json::from_str::<SecretValue>("{}").unwrap_err();
        assert!(is_secret_format_message(&err.to_string()));
    }
}
