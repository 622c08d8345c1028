//! Secret payloads as returned by a store

use serde::Serialize;
use serde_json::{Map, Value};

/// The data a store holds at one path.
///
/// Serializes untagged, so printing a value as JSON shows exactly what the
/// store returned, member order and types included.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SecretValue {
    /// A string secret
    Raw(String),
    /// Field name to value, in the order the store returned them
    Fields(Map<String, Value>),
    /// Any other JSON payload (numbers, booleans, arrays, null)
    Json(Value),
}

impl SecretValue {
    /// Build a value from the inner JSON payload of a store response.
    #[must_use]
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::String(s) => Self::Raw(s),
            Value::Object(map) => Self::Fields(map),
            other => Self::Json(other),
        }
    }

    /// Unwrap a usable string: the raw value itself, or the string member
    /// `field` of a map.
    ///
    /// Empty strings and non-string members are treated as absent.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&str> {
        let value = match self {
            Self::Raw(raw) => raw.as_str(),
            Self::Fields(fields) => fields.get(field)?.as_str()?,
            Self::Json(_) => return None,
        };
        (!value.is_empty()).then_some(value)
    }

    /// Field names for maps, empty otherwise. Safe to log.
    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        match self {
            Self::Fields(fields) => fields.keys().map(String::as_str).collect(),
            Self::Raw(_) | Self::Json(_) => Vec::new(),
        }
    }
}

impl From<String> for SecretValue {
    fn from(value: String) -> Self {
        Self::Raw(value)
    }
}

impl From<&str> for SecretValue {
    fn from(value: &str) -> Self {
        Self::Raw(value.to_string())
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for SecretValue
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(fields: [(K, V); N]) -> Self {
        fields.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for SecretValue
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Fields(
            iter.into_iter()
                .map(|(k, v)| (k.into(), Value::String(v.into())))
                .collect(),
        )
    }
}

impl std::fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Raw(_) => f.write_str("Raw([REDACTED])"),
            Self::Json(_) => f.write_str("Json([REDACTED])"),
            Self::Fields(fields) => f
                .debug_map()
                .entries(fields.keys().map(|k| (k, "[REDACTED]")))
                .finish(),
        }
    }
}
