use itemstore_core::gateway::{GatewayEvent, GatewayResponse, HandlerError, ResponseBody};
use itemstore_core::item::DeleteItemRequest;
use itemstore_core::storage::ItemRepository;

use super::failure_response;

/// Delete the item named by `id`. Unknown ids succeed.
pub async fn delete_item(repo: &dyn ItemRepository, event: GatewayEvent) -> GatewayResponse {
    match delete_item_impl(repo, &event).await {
        Ok(()) => GatewayResponse::ok(&ResponseBody::message("Item deleted successfully")),
        Err(err) => failure_response(err),
    }
}

async fn delete_item_impl(
    repo: &dyn ItemRepository,
    event: &GatewayEvent,
) -> Result<(), HandlerError> {
    tracing::debug!(event = ?event, "Received delete item request");

    let payload: DeleteItemRequest = event.parse_body()?;
    let id = payload.validate()?;

    repo.delete_item(&id).await?;

    tracing::info!(item_id = %id, "Deleted item");
    Ok(())
}
