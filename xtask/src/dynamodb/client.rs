//! AWS SDK client setup (Imperative Shell).

use super::error::{DynamodbError, Result};
use super::planning::{TableState, TableStatus};
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::Client;
use itemstore::config::Config;

/// Returns a display string for the target environment.
pub fn target_display(config: &Config) -> String {
    match &config.endpoint_url {
        Some(url) => format!("Local DynamoDB ({})", url),
        None => format!("AWS DynamoDB (region: {})", config.region),
    }
}

/// Creates a DynamoDB client the same way the handlers do.
pub async fn create_client(config: &Config) -> Client {
    itemstore::storage::dynamodb::create_client(config).await
}

/// Fetches current table state, returns None if table doesn't exist.
pub async fn get_table_state(client: &Client, table_name: &str) -> Result<Option<TableState>> {
    match client.describe_table().table_name(table_name).send().await {
        Ok(response) => {
            let Some(table) = response.table() else {
                return Ok(None);
            };

            let status = match table.table_status() {
                Some(aws_sdk_dynamodb::types::TableStatus::Creating) => TableStatus::Creating,
                Some(aws_sdk_dynamodb::types::TableStatus::Updating) => TableStatus::Updating,
                Some(aws_sdk_dynamodb::types::TableStatus::Deleting) => TableStatus::Deleting,
                _ => TableStatus::Active,
            };

            let partition_key = table
                .key_schema()
                .iter()
                .find(|k| k.key_type() == &aws_sdk_dynamodb::types::KeyType::Hash)
                .map(|k| k.attribute_name().to_string());

            Ok(Some(TableState {
                status,
                partition_key,
            }))
        }
        Err(err) => {
            if err
                .as_service_error()
                .is_some_and(|e| e.is_resource_not_found_exception())
            {
                Ok(None)
            } else {
                Err(DynamodbError::AwsSdk(
                    DisplayErrorContext(&err).to_string(),
                ))
            }
        }
    }
}
