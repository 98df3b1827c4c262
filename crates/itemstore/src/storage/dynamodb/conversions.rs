//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! records. The items table is schemaless apart from its key, so conversion
//! goes through `serde_json::Value` in both directions.

use std::collections::HashMap;

use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::AttributeValue;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use itemstore_core::item::{Record, ID_FIELD};
use itemstore_core::storage::RepositoryError;
use serde_json::{Map, Number, Value};

// ============================================================================
// Record conversions
// ============================================================================

/// Convert a Record to a DynamoDB item.
pub fn record_to_item(record: &Record) -> HashMap<String, AttributeValue> {
    let mut item: HashMap<String, AttributeValue> = record
        .fields
        .iter()
        .map(|(name, value)| (name.clone(), json_to_attribute(value)))
        .collect();

    // Key last so it always wins.
    item.insert(ID_FIELD.to_string(), AttributeValue::S(record.id.clone()));

    item
}

/// Convert a DynamoDB item to a Record.
pub fn item_to_record(item: &HashMap<String, AttributeValue>) -> Result<Record, RepositoryError> {
    let id = get_string(item, ID_FIELD)?;

    let mut fields = Map::new();
    for (name, value) in item {
        if name == ID_FIELD {
            continue;
        }
        fields.insert(name.clone(), attribute_to_json(value)?);
    }

    Ok(Record { id, fields })
}

// ============================================================================
// Value conversions
// ============================================================================

/// Convert a JSON value to a DynamoDB attribute value.
pub fn json_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(values) => AttributeValue::L(values.iter().map(json_to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(
            map.iter()
                .map(|(k, v)| (k.clone(), json_to_attribute(v)))
                .collect(),
        ),
    }
}

/// Convert a DynamoDB attribute value to JSON.
///
/// Binary values are rendered as standard base64 strings; string and number
/// sets become arrays.
pub fn attribute_to_json(value: &AttributeValue) -> Result<Value, RepositoryError> {
    match value {
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::N(n) => parse_number(n),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::L(values) => values
            .iter()
            .map(attribute_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(map) => map
            .iter()
            .map(|(k, v)| attribute_to_json(v).map(|v| (k.clone(), v)))
            .collect::<Result<Map<_, _>, _>>()
            .map(Value::Object),
        AttributeValue::Ss(values) => Ok(Value::Array(
            values.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(values) => values
            .iter()
            .map(|n| parse_number(n))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::B(blob) => Ok(encode_blob(blob)),
        AttributeValue::Bs(blobs) => Ok(Value::Array(blobs.iter().map(encode_blob).collect())),
        other => Err(RepositoryError::Serialization(format!(
            "Unsupported attribute value: {:?}",
            other
        ))),
    }
}

/// Parse a DynamoDB number string into the narrowest JSON number.
fn parse_number(n: &str) -> Result<Value, RepositoryError> {
    if let Ok(i) = n.parse::<i64>() {
        return Ok(Value::from(i));
    }
    if let Ok(u) = n.parse::<u64>() {
        return Ok(Value::from(u));
    }
    n.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| RepositoryError::Serialization(format!("Invalid number '{n}'")))
}

fn encode_blob(blob: &Blob) -> Value {
    Value::String(STANDARD.encode(blob.as_ref()))
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute from an item.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing string attribute '{key}'")))
}
