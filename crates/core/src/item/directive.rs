//! Update directive builder.
//!
//! Turns an open mapping of field name to new value into a DynamoDB `SET`
//! expression. Every field name goes through an expression attribute name
//! placeholder (`#f0`, `#f1`, ...) and every value through an expression
//! attribute value placeholder (`:v0`, `:v1`, ...), so reserved words such
//! as `name` and names containing `.` or spaces address the top-level
//! attribute literally.

use serde_json::{Map, Value};

use super::error::ValidationError;
use super::types::{Record, CREATED_AT_FIELD, ID_FIELD};

/// Fields no update may touch.
pub const PROTECTED_FIELDS: [&str; 2] = [ID_FIELD, CREATED_AT_FIELD];

/// A validated, non-empty set of top-level field assignments.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateDirective {
    assignments: Vec<(String, Value)>,
}

impl UpdateDirective {
    /// Builds a directive from the caller's `updates` mapping.
    ///
    /// Rejects an empty mapping, empty field names, and any attempt to
    /// overwrite the key or the creation timestamp.
    pub fn from_updates(updates: Map<String, Value>) -> Result<Self, ValidationError> {
        if updates.is_empty() {
            return Err(ValidationError::EmptyUpdates);
        }

        let mut assignments = Vec::with_capacity(updates.len());
        for (field, value) in updates {
            if field.is_empty() {
                return Err(ValidationError::EmptyFieldName);
            }
            if PROTECTED_FIELDS.contains(&field.as_str()) {
                return Err(ValidationError::ProtectedField(field));
            }
            assignments.push((field, value));
        }

        Ok(Self { assignments })
    }

    /// Number of assigned fields. Never zero.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether nothing is assigned. False for any built directive.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// The `SET` expression, e.g. `SET #f0 = :v0, #f1 = :v1`.
    pub fn expression(&self) -> String {
        let clauses: Vec<String> = (0..self.assignments.len())
            .map(|i| format!("{} = {}", name_placeholder(i), value_placeholder(i)))
            .collect();
        format!("SET {}", clauses.join(", "))
    }

    /// Placeholder to field name pairs for `ExpressionAttributeNames`.
    pub fn attribute_names(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        self.assignments
            .iter()
            .enumerate()
            .map(|(i, (field, _))| (name_placeholder(i), field.as_str()))
    }

    /// Placeholder to value pairs for `ExpressionAttributeValues`.
    pub fn attribute_values(&self) -> impl Iterator<Item = (String, &Value)> + '_ {
        self.assignments
            .iter()
            .enumerate()
            .map(|(i, (_, value))| (value_placeholder(i), value))
    }

    /// Applies the assignments to a record in place.
    pub fn apply(&self, record: &mut Record) {
        for (field, value) in &self.assignments {
            record.fields.insert(field.clone(), value.clone());
        }
    }
}

fn name_placeholder(index: usize) -> String {
    format!("#f{index}")
}

fn value_placeholder(index: usize) -> String {
    format!(":v{index}")
}
