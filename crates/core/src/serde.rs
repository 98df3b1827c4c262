//! Serde helper functions for request deserialization.
//!
//! Gateway clients routinely send empty strings where a value is absent.
//! These helpers fold those into `None` so validation only has one case to
//! check.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}
