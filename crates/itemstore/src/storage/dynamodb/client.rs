//! Process-wide DynamoDB handle.
//!
//! The client is built on first use and then shared read-only by every
//! invocation the Lambda execution environment serves.

use aws_sdk_dynamodb::Client;
use tokio::sync::OnceCell;

use crate::config::Config;

use super::DynamoDbRepository;

static REPOSITORY: OnceCell<DynamoDbRepository> = OnceCell::const_new();

/// Creates a DynamoDB client for the given configuration.
pub async fn create_client(config: &Config) -> Client {
    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    let sdk_config = sdk_config_loader.load().await;
    Client::new(&sdk_config)
}

/// Returns the shared repository, building it from the environment on the
/// first call.
pub async fn shared_repository() -> &'static DynamoDbRepository {
    REPOSITORY
        .get_or_init(|| async {
            let config = Config::from_env();
            tracing::info!(
                table = %config.table_name,
                region = %config.region,
                endpoint = ?config.endpoint_url,
                "Initializing DynamoDB client"
            );
            let client = create_client(&config).await;
            DynamoDbRepository::new(client, config.table_name)
        })
        .await
}
