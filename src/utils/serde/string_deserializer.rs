//! Deserialization utilities for string values the vendor sometimes sends
//! as JSON numbers.
//!
//! The vendor's `timestamp` field arrives as a string in some responses and
//! as an integer in others; callers of `/login` forward it either way. The
//! signing pre-hash embeds the value verbatim, so both encodings must
//! deserialize to the same textual form.

use std::fmt;

use serde::{de, Deserializer};

#[derive(Debug)]
struct StringOrNumberVisitor;

impl de::Visitor<'_> for StringOrNumberVisitor {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string or an integer")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value.to_owned())
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value.to_string())
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value.to_string())
    }
}

pub fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(StringOrNumberVisitor)
}

struct OptionalStringOrNumberVisitor;

impl<'de> de::Visitor<'de> for OptionalStringOrNumberVisitor {
    type Value = Option<String>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an optional string or integer")
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(StringOrNumberVisitor).map(Some)
    }
}

pub fn deserialize_optional_string_or_number<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(OptionalStringOrNumberVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "deserialize_string_or_number")]
        timestamp: String,
    }

    #[test]
    fn test_deserializes_string() {
        let w: Wrapper = serde_json::from_str(r#"{"timestamp": "1742830229382"}"#).unwrap();
        assert_eq!(w.timestamp, "1742830229382");
    }

    #[test]
    fn test_deserializes_integer() {
        let w: Wrapper = serde_json::from_str(r#"{"timestamp": 1742830229382}"#).unwrap();
        assert_eq!(w.timestamp, "1742830229382");
    }

    #[test]
    fn test_rejects_other_types() {
        let result: Result<Wrapper, _> = serde_json::from_str(r#"{"timestamp": [1]}"#);
        assert!(result.is_err());
    }

    #[derive(Deserialize)]
    struct OptionalWrapper {
        #[serde(default, deserialize_with = "deserialize_optional_string_or_number")]
        fee: Option<String>,
    }

    #[test]
    fn test_optional_variant_handles_absence_and_numbers() {
        let w: OptionalWrapper = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(w.fee, None);
        let w: OptionalWrapper = serde_json::from_str(r#"{"fee": null}"#).unwrap();
        assert_eq!(w.fee, None);
        let w: OptionalWrapper = serde_json::from_str(r#"{"fee": 3}"#).unwrap();
        assert_eq!(w.fee, Some("3".to_string()));
        let w: OptionalWrapper = serde_json::from_str(r#"{"fee": "3.5"}"#).unwrap();
        assert_eq!(w.fee, Some("3.5".to_string()));
    }
}
