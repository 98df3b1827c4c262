//! DynamoDB repository implementation.
//!
//! Implements the repository trait from `itemstore_core::storage` using
//! DynamoDB.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;

use itemstore_core::item::{Record, UpdateDirective, ID_FIELD};
use itemstore_core::storage::{ItemRepository, Result};

use super::conversions::{item_to_record, json_to_attribute, record_to_item};
use super::error::{map_delete_item_error, map_put_item_error, map_scan_error, map_update_item_error};

/// DynamoDB-based repository implementation.
///
/// Holds an immutable client handle; cloning is cheap and shares the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    fn key(id: &str) -> AttributeValue {
        AttributeValue::S(id.to_string())
    }
}

#[async_trait]
impl ItemRepository for DynamoDbRepository {
    async fn put_item(&self, record: &Record) -> Result<()> {
        let item = record_to_item(record);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn scan_items(&self) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;

        loop {
            let result = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(map_scan_error)?;

            for item in result.items.unwrap_or_default() {
                records.push(item_to_record(&item)?);
            }

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => {
                    tracing::debug!(fetched = records.len(), "Scan page truncated, continuing");
                    start_key = Some(key);
                }
                _ => break,
            }
        }

        Ok(records)
    }

    async fn update_item(&self, id: &str, directive: &UpdateDirective) -> Result<Record> {
        let mut request = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(ID_FIELD, Self::key(id))
            .update_expression(directive.expression())
            .return_values(ReturnValue::AllNew);

        for (placeholder, field) in directive.attribute_names() {
            request = request.expression_attribute_names(placeholder, field);
        }
        for (placeholder, value) in directive.attribute_values() {
            request = request.expression_attribute_values(placeholder, json_to_attribute(value));
        }

        let result = request.send().await.map_err(map_update_item_error)?;

        item_to_record(&result.attributes.unwrap_or_default())
    }

    async fn delete_item(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(ID_FIELD, Self::key(id))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
