//! Custom serde helpers for fields the backend serializes loosely.

use serde::{Deserialize, Deserializer};
use uuid::Uuid;

/// Deserializes an optional UUID, treating an empty string as absent.
pub fn deserialize_optional_uuid<'de, D>(deserializer: D) -> Result<Option<Uuid>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => Uuid::parse_str(&s)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Deserializes an optional string, collapsing empty or whitespace-only
/// values to `None`.
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "deserialize_optional_uuid")]
        id: Option<Uuid>,
        #[serde(default, deserialize_with = "empty_string_as_none")]
        phone: Option<String>,
    }

    #[test]
    fn empty_uuid_string_becomes_none() {
        let holder: Holder = serde_json::from_str(r#"{"id": ""}"#).unwrap();
        assert_eq!(holder.id, None);
    }

    #[test]
    fn valid_uuid_string_parses() {
        let holder: Holder =
            serde_json::from_str(r#"{"id": "b5a9e1a2-9d1f-4a64-8f0a-0a4c5c77d001"}"#).unwrap();
        assert!(holder.id.is_some());
    }

    #[test]
    fn garbage_uuid_string_errors() {
        assert!(serde_json::from_str::<Holder>(r#"{"id": "not-a-uuid"}"#).is_err());
    }

    #[test]
    fn blank_strings_collapse_to_none() {
        let holder: Holder = serde_json::from_str(r#"{"phone": "   "}"#).unwrap();
        assert_eq!(holder.phone, None);

        let holder: Holder = serde_json::from_str(r#"{"phone": "0712345678"}"#).unwrap();
        assert_eq!(holder.phone.as_deref(), Some("0712345678"));
    }
}
