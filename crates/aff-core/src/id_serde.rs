//! Serde adapters for identifiers the remote API sends as either JSON strings
//! or JSON integers.
//!
//! The login endpoint answers `"user_id": "42"` on one path and `"id": 42` on
//! another; order codes show the same drift. Both shapes are accepted and
//! normalised to `String`.
//!
//! Usage:
//! ```ignore
//! #[serde(default, deserialize_with = "aff_core::id_serde::option")]
//! pub user_id: Option<String>,
//! ```

use serde::{Deserialize, Deserializer, de};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
    Unsigned(u64),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Int(n) => n.to_string(),
            Self::Unsigned(n) => n.to_string(),
        }
    }
}

/// Deserialize a required string-or-integer identifier.
pub fn required<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawId::deserialize(deserializer)
        .map_err(|_| de::Error::custom("expected a string or integer identifier"))?;
    Ok(raw.into_string())
}

/// Deserialize an optional string-or-integer identifier. `null` maps to `None`.
pub fn option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawId>::deserialize(deserializer)
        .map_err(|_| de::Error::custom("expected a string or integer identifier"))?;
    Ok(raw.map(RawId::into_string))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "super::required")]
        id: String,
        #[serde(default, deserialize_with = "super::option")]
        other: Option<String>,
    }

    #[test]
    fn accepts_integer_and_string_ids() {
        let p: Probe = serde_json::from_str(r#"{"id": 42, "other": "7"}"#).unwrap();
        assert_eq!(p.id, "42");
        assert_eq!(p.other.as_deref(), Some("7"));
    }

    #[test]
    fn missing_and_null_optional_ids_are_none() {
        let p: Probe = serde_json::from_str(r#"{"id": "a"}"#).unwrap();
        assert!(p.other.is_none());
        let p: Probe = serde_json::from_str(r#"{"id": "a", "other": null}"#).unwrap();
        assert!(p.other.is_none());
    }

    #[test]
    fn rejects_non_scalar_ids() {
        let result = serde_json::from_str::<Probe>(r#"{"id": [1]}"#);
        assert!(result.is_err());
    }
}
