use itemstore_core::gateway::{GatewayEvent, GatewayResponse, ResponseBody};
use itemstore_core::storage::ItemRepository;

use super::failure_response;

/// List every item in the table. The request body is ignored.
pub async fn list_items(repo: &dyn ItemRepository, _event: GatewayEvent) -> GatewayResponse {
    match repo.scan_items().await {
        Ok(records) => {
            tracing::info!(count = records.len(), "Listed items");
            GatewayResponse::ok(&ResponseBody::data(records))
        }
        Err(err) => failure_response(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::FailingRepository;
    use crate::storage::InMemoryRepository;
    use itemstore_core::item::Record;

    #[tokio::test]
    async fn test_empty_table() {
        let repo = InMemoryRepository::new();

        let response = list_items(&repo, GatewayEvent::default()).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.body_json().unwrap(),
            serde_json::json!({"success": true, "data": []})
        );
    }

    #[tokio::test]
    async fn test_returns_every_record() {
        let records: Vec<Record> = (0..25)
            .map(|i| Record::new(Some(format!("item {i}")), None))
            .collect();
        let repo = InMemoryRepository::with_records(records.clone());

        let response = list_items(&repo, GatewayEvent::default()).await;

        let body = response.body_json().unwrap();
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), records.len());
        for record in &records {
            assert!(data.iter().any(|r| r["id"] == record.id.as_str()));
        }
    }

    #[tokio::test]
    async fn test_body_is_ignored() {
        let repo = InMemoryRepository::with_records([Record::new(None, None)]);

        for event in [
            GatewayEvent::with_encoded_body("not json"),
            GatewayEvent::new(serde_json::json!({"isBase64Encoded": null, "body": 7})),
            GatewayEvent::new(serde_json::json!("not an event")),
        ] {
            let response = list_items(&repo, event).await;
            assert_eq!(response.status_code, 200);
        }
    }

    #[tokio::test]
    async fn test_storage_fault_is_server_error() {
        let response = list_items(&FailingRepository, GatewayEvent::default()).await;

        assert_eq!(response.status_code, 500);
        assert_eq!(response.body_json().unwrap()["success"], false);
    }
}
