use itemstore_core::gateway::{GatewayEvent, GatewayResponse, HandlerError, ResponseBody};
use itemstore_core::item::{CreateItemRequest, Record};
use itemstore_core::storage::ItemRepository;

use super::failure_response;

/// Create an item from `{name, description}` and echo it back.
pub async fn create_item(repo: &dyn ItemRepository, event: GatewayEvent) -> GatewayResponse {
    match create_item_impl(repo, &event).await {
        Ok(record) => {
            GatewayResponse::ok(&ResponseBody::created("Item created successfully", record))
        }
        Err(err) => failure_response(err),
    }
}

async fn create_item_impl(
    repo: &dyn ItemRepository,
    event: &GatewayEvent,
) -> Result<Record, HandlerError> {
    let payload: CreateItemRequest = event.parse_body()?;
    tracing::debug!(payload = ?payload, "Received create item request");

    let record = payload.into_record();
    repo.put_item(&record).await?;

    tracing::info!(item_id = %record.id, "Created new item");
    Ok(record)
}
