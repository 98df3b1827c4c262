//! Request payloads accepted by the handlers.
//!
//! These are pure data types; validation turns them into the inputs the
//! repository needs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::directive::UpdateDirective;
use super::error::ValidationError;
use super::types::Record;
use crate::serde::deserialize_optional_string;

/// Request payload for creating an item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateItemRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateItemRequest {
    /// Convert into a new Record with a minted id and timestamp.
    pub fn into_record(self) -> Record {
        Record::new(self.name, self.description)
    }
}

/// Request payload for updating an item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updates: Option<Map<String, Value>>,
}

/// A validated update: target key plus the directive to apply.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemUpdate {
    pub id: String,
    pub directive: UpdateDirective,
}

impl UpdateItemRequest {
    /// Validates the request. The id is checked before the updates.
    pub fn validate(self) -> Result<ItemUpdate, ValidationError> {
        let id = self.id.ok_or(ValidationError::MissingId)?;
        let directive = UpdateDirective::from_updates(self.updates.unwrap_or_default())?;
        Ok(ItemUpdate { id, directive })
    }
}

/// Request payload for deleting an item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteItemRequest {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
}

impl DeleteItemRequest {
    /// Returns the id to delete.
    pub fn validate(self) -> Result<String, ValidationError> {
        self.id.ok_or(ValidationError::MissingId)
    }
}
