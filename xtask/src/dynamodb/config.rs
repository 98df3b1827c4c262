//! Table configuration types (Functional Core - pure data).

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub billing_mode: BillingMode,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// DynamoDB attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
}

/// Billing mode for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingMode {
    PayPerRequest,
}

impl TableConfig {
    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }
}

/// Returns the items table layout: a single string hash key `id`, no sort
/// key and no secondary indexes.
pub fn items_table_config() -> TableConfig {
    TableConfig {
        table_name: itemstore::config::DEFAULT_TABLE_NAME.to_string(),
        partition_key: KeyAttribute {
            name: itemstore_core::item::ID_FIELD.to_string(),
            attribute_type: AttributeType::String,
        },
        billing_mode: BillingMode::PayPerRequest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_table_is_keyed_by_id() {
        let config = items_table_config();

        assert_eq!(config.table_name, "ItemsTable");
        assert_eq!(config.partition_key.name, "id");
        assert_eq!(config.partition_key.attribute_type, AttributeType::String);
        assert_eq!(config.billing_mode, BillingMode::PayPerRequest);
    }

    #[test]
    fn test_with_table_name() {
        let config = items_table_config().with_table_name("Other");

        assert_eq!(config.table_name, "Other");
        assert_eq!(config.partition_key.name, "id");
    }
}
