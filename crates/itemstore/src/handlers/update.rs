use itemstore_core::gateway::{GatewayEvent, GatewayResponse, HandlerError, ResponseBody};
use itemstore_core::item::{ItemUpdate, Record, UpdateItemRequest};
use itemstore_core::storage::ItemRepository;

use super::failure_response;

/// Apply `updates` to the item named by `id` and return the stored result.
pub async fn update_item(repo: &dyn ItemRepository, event: GatewayEvent) -> GatewayResponse {
    match update_item_impl(repo, &event).await {
        Ok(record) => GatewayResponse::ok(&ResponseBody::data(record)),
        Err(err) => failure_response(err),
    }
}

async fn update_item_impl(
    repo: &dyn ItemRepository,
    event: &GatewayEvent,
) -> Result<Record, HandlerError> {
    let payload: UpdateItemRequest = event.parse_body()?;
    let ItemUpdate { id, directive } = payload.validate()?;

    tracing::debug!(
        item_id = %id,
        expression = %directive.expression(),
        "Received update item request"
    );

    let record = repo.update_item(&id, &directive).await?;

    tracing::info!(item_id = %id, fields = directive.len(), "Updated item");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::FailingRepository;
    use crate::storage::InMemoryRepository;
    use serde_json::json;

    fn seeded() -> (InMemoryRepository, Record) {
        let record = Record::new(Some("old".to_string()), Some("keep".to_string()));
        (InMemoryRepository::with_records([record.clone()]), record)
    }

    #[tokio::test]
    async fn test_update_returns_post_update_record() {
        let (repo, record) = seeded();
        let event = GatewayEvent::with_encoded_body(
            json!({"id": record.id, "updates": {"name": "new", "color": "red"}}).to_string(),
        );

        let response = update_item(&repo, event).await;

        assert_eq!(response.status_code, 200);
        let body = response.body_json().unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], record.id.as_str());
        assert_eq!(body["data"]["name"], "new");
        assert_eq!(body["data"]["color"], "red");
        assert_eq!(body["data"]["description"], "keep");
        assert_eq!(body["data"]["created_at"], record.created_at().unwrap());
    }

    #[tokio::test]
    async fn test_missing_id_is_client_error() {
        let (repo, record) = seeded();
        let event = GatewayEvent::with_decoded_body(json!({"updates": {"name": "new"}}));

        let response = update_item(&repo, event).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(
            response.body_json().unwrap(),
            json!({"success": false, "error": "Missing item ID"})
        );
        assert_eq!(repo.get(&record.id).await, Some(record));
    }

    #[tokio::test]
    async fn test_empty_updates_is_client_error() {
        let (repo, record) = seeded();

        for body in [
            json!({"id": record.id}),
            json!({"id": record.id, "updates": {}}),
        ] {
            let response = update_item(&repo, GatewayEvent::with_decoded_body(body)).await;
            assert_eq!(response.status_code, 400);
            assert_eq!(
                response.body_json().unwrap()["error"],
                "No fields to update"
            );
        }
    }

    #[tokio::test]
    async fn test_protected_fields_are_rejected() {
        let (repo, record) = seeded();
        let event = GatewayEvent::with_decoded_body(
            json!({"id": record.id, "updates": {"created_at": "1970-01-01T00:00:00Z"}}),
        );

        let response = update_item(&repo, event).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(repo.get(&record.id).await, Some(record));
    }

    #[tokio::test]
    async fn test_unknown_id_upserts() {
        let repo = InMemoryRepository::new();
        let event =
            GatewayEvent::with_decoded_body(json!({"id": "ghost", "updates": {"name": "new"}}));

        let response = update_item(&repo, event).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.body_json().unwrap()["data"],
            json!({"id": "ghost", "name": "new"})
        );
    }

    #[tokio::test]
    async fn test_storage_fault_is_server_error() {
        let event =
            GatewayEvent::with_decoded_body(json!({"id": "item-1", "updates": {"name": "new"}}));

        let response = update_item(&FailingRepository, event).await;

        assert_eq!(response.status_code, 500);
        assert_eq!(response.body_json().unwrap()["success"], false);
    }
}
