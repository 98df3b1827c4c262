use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Attribute holding the record name.
pub const NAME_FIELD: &str = "name";
/// Attribute holding the record description.
pub const DESCRIPTION_FIELD: &str = "description";
/// Attribute holding the creation timestamp.
pub const CREATED_AT_FIELD: &str = "created_at";
/// Partition key attribute of the items table.
pub const ID_FIELD: &str = "id";

/// A single stored item.
///
/// The schema is open: Create writes `name`, `description` and `created_at`,
/// and Update may add any other top-level attribute afterwards. Everything
/// except the key lives in `fields` and is flattened when serialized, so a
/// record renders as `{"id": ..., "name": ..., ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record {
    /// Creates a record with a freshly minted id and the current time.
    pub fn new(name: Option<String>, description: Option<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name, description, Utc::now())
    }

    /// Creates a record with an explicit id and creation time.
    ///
    /// Absent `name`/`description` are stored as JSON null.
    pub fn with_id(
        id: impl Into<String>,
        name: Option<String>,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let mut fields = Map::new();
        fields.insert(NAME_FIELD.to_string(), optional_string(name));
        fields.insert(DESCRIPTION_FIELD.to_string(), optional_string(description));
        fields.insert(
            CREATED_AT_FIELD.to_string(),
            Value::String(format_timestamp(created_at)),
        );

        Self {
            id: id.into(),
            fields,
        }
    }

    /// Creates a record holding only its key.
    pub fn bare(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Returns the record name when it is a string.
    pub fn name(&self) -> Option<&str> {
        self.fields.get(NAME_FIELD).and_then(Value::as_str)
    }

    /// Returns the record description when it is a string.
    pub fn description(&self) -> Option<&str> {
        self.fields.get(DESCRIPTION_FIELD).and_then(Value::as_str)
    }

    /// Returns the raw `created_at` timestamp string.
    pub fn created_at(&self) -> Option<&str> {
        self.fields.get(CREATED_AT_FIELD).and_then(Value::as_str)
    }

    /// Looks up any attribute by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

/// Formats a timestamp as RFC 3339 in UTC with a `Z` suffix.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn optional_string(value: Option<String>) -> Value {
    value.map(Value::String).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_mints_unique_ids() {
        let first = Record::new(Some("A".to_string()), None);
        let second = Record::new(Some("A".to_string()), None);

        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);
        assert!(Uuid::parse_str(&first.id).is_ok());
    }

    #[test]
    fn test_created_at_is_utc_rfc3339() {
        let record = Record::new(None, None);
        let created_at = record.created_at().unwrap();

        let parsed = DateTime::parse_from_rfc3339(created_at).unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 0);
        assert!(created_at.ends_with('Z'));
    }

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let record = Record::with_id("item-1", None, None, at);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "item-1",
                "name": null,
                "description": null,
                "created_at": "2024-01-15T10:30:00.000000Z"
            })
        );
    }

    #[test]
    fn test_extra_attributes_are_flattened() {
        let json = serde_json::json!({
            "id": "item-2",
            "name": "Lamp",
            "color": "blue",
            "stock": 4
        });

        let record: Record = serde_json::from_value(json).unwrap();
        assert_eq!(record.id, "item-2");
        assert_eq!(record.name(), Some("Lamp"));
        assert_eq!(record.description(), None);
        assert_eq!(record.get("color"), Some(&Value::from("blue")));
        assert_eq!(record.get("stock"), Some(&Value::from(4)));
    }
}
