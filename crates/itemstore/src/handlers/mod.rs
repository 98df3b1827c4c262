//! Item CRUD handlers.
//!
//! Each handler takes the repository and the decoded gateway event and
//! always returns a response: failures are logged and folded into the
//! failure envelope at the handler boundary.

mod create;
mod delete;
mod list;
mod update;

pub use create::create_item;
pub use delete::delete_item;
pub use list::list_items;
pub use update::update_item;

use itemstore_core::gateway::{GatewayResponse, HandlerError};

/// Log a handler failure and convert it into its response.
pub fn failure_response(err: HandlerError) -> GatewayResponse {
    match &err {
        HandlerError::Validation(e) => tracing::warn!(error = %e, "Rejected request"),
        HandlerError::Operation(e) => tracing::error!(error = %e, "Operation failed"),
        HandlerError::Malformed(e) => tracing::error!(error = %e, "Could not decode request"),
    }
    err.into_response()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryRepository;
    use itemstore_core::gateway::GatewayEvent;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_read_delete_round_trip() {
        let repo = InMemoryRepository::new();

        // Create
        let response = create_item(
            &repo,
            GatewayEvent::with_encoded_body(r#"{"name": "A", "description": "B"}"#),
        )
        .await;
        assert_eq!(response.status_code, 200);
        let item = response.body_json().unwrap()["item"].clone();
        let id = item["id"].as_str().unwrap().to_string();

        // Read: present with matching fields
        let response = list_items(&repo, GatewayEvent::default()).await;
        let data = response.body_json().unwrap()["data"].clone();
        let found = data
            .as_array()
            .unwrap()
            .iter()
            .find(|r| r["id"] == id.as_str())
            .cloned()
            .unwrap();
        assert_eq!(found["name"], "A");
        assert_eq!(found["description"], "B");
        assert_eq!(found, item);

        // Delete
        let response = delete_item(&repo, GatewayEvent::with_decoded_body(json!({"id": id}))).await;
        assert_eq!(response.status_code, 200);

        // Read: absent
        let response = list_items(&repo, GatewayEvent::default()).await;
        let data = response.body_json().unwrap()["data"].clone();
        assert!(data
            .as_array()
            .unwrap()
            .iter()
            .all(|r| r["id"] != id.as_str()));
    }

    #[tokio::test]
    async fn test_update_is_visible_to_read() {
        let repo = InMemoryRepository::new();

        let response = create_item(
            &repo,
            GatewayEvent::with_decoded_body(json!({"name": "old", "description": "same"})),
        )
        .await;
        let created = response.body_json().unwrap()["item"].clone();
        let id = created["id"].as_str().unwrap().to_string();

        let response = update_item(
            &repo,
            GatewayEvent::with_decoded_body(json!({"id": id, "updates": {"name": "new"}})),
        )
        .await;
        assert_eq!(response.status_code, 200);

        let response = list_items(&repo, GatewayEvent::default()).await;
        let data = response.body_json().unwrap()["data"].clone();
        let record = &data.as_array().unwrap()[0];
        assert_eq!(record["name"], "new");
        assert_eq!(record["description"], created["description"]);
        assert_eq!(record["created_at"], created["created_at"]);
        assert_eq!(record["id"], created["id"]);
    }

    #[test]
    fn test_failure_response_codes() {
        use itemstore_core::item::ValidationError;
        use itemstore_core::storage::RepositoryError;

        let response = failure_response(ValidationError::MissingId.into());
        assert_eq!(response.status_code, 400);

        let response =
            failure_response(RepositoryError::QueryFailed("Table not found".to_string()).into());
        assert_eq!(response.status_code, 500);
        assert_eq!(
            response.body_json().unwrap()["error"],
            "Query failed: Table not found"
        );
    }
}
