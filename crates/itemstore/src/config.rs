use std::env;

/// Default items table name.
pub const DEFAULT_TABLE_NAME: &str = "ItemsTable";
/// Default AWS region of the items table.
pub const DEFAULT_REGION: &str = "us-east-2";

/// Handler configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// DynamoDB table holding the items (default: "ItemsTable")
    pub table_name: String,
    /// AWS region of the table (default: "us-east-2")
    pub region: String,
    /// Endpoint override, e.g. a local DynamoDB (default: unset)
    pub endpoint_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ITEMS_TABLE` - Table name (default: "ItemsTable")
    /// - `AWS_REGION` - Region (default: "us-east-2")
    /// - `AWS_ENDPOINT_URL` - Endpoint override (default: unset)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            table_name: non_empty("ITEMS_TABLE").unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            region: non_empty("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            endpoint_url: non_empty("AWS_ENDPOINT_URL"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
