//! Incoming gateway event.
//!
//! API Gateway hands the request body over either as a JSON-encoded string
//! (proxy integration, optionally base64 encoded) or as an already decoded
//! object (custom integrations and direct invocations). [`GatewayEvent`]
//! keeps the raw invocation payload untouched; [`GatewayEvent::parse_body`]
//! reads the envelope and turns either body form into a typed request in
//! one step, so handlers that ignore the body never decode anything.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// A payload that could not be decoded into a request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Invalid event: {0}")]
    Event(String),
    #[error("Invalid request body: {0}")]
    Body(String),
}

/// One Lambda invocation payload, as delivered by the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayEvent {
    payload: Value,
}

/// The parts of the payload a body parse reads. Everything else is ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    #[serde(default)]
    body: Option<EventBody>,
    #[serde(default)]
    is_base64_encoded: Option<bool>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EventBody {
    /// JSON text, possibly base64 encoded.
    Encoded(String),
    /// A body the gateway already decoded.
    Decoded(Value),
}

impl Default for GatewayEvent {
    fn default() -> Self {
        Self::new(Value::Object(Map::new()))
    }
}

impl GatewayEvent {
    /// Wraps a raw invocation payload.
    pub fn new(payload: Value) -> Self {
        Self { payload }
    }

    /// Builds an event whose body is a JSON-encoded string.
    pub fn with_encoded_body(body: impl Into<String>) -> Self {
        Self::new(Value::Object(Map::from_iter([(
            "body".to_string(),
            Value::String(body.into()),
        )])))
    }

    /// Builds an event whose body is already decoded.
    pub fn with_decoded_body(body: Value) -> Self {
        Self::new(Value::Object(Map::from_iter([("body".to_string(), body)])))
    }

    /// Deserializes the body into a request type.
    ///
    /// An absent, null or blank body yields `T::default()`.
    pub fn parse_body<T>(&self) -> Result<T, DecodeError>
    where
        T: DeserializeOwned + Default,
    {
        let envelope = Envelope::deserialize(&self.payload)
            .map_err(|e| DecodeError::Event(e.to_string()))?;
        let base64 = envelope.is_base64_encoded.unwrap_or(false);

        let parsed = match envelope.body {
            None | Some(EventBody::Decoded(Value::Null)) => return Ok(T::default()),
            Some(EventBody::Decoded(value)) => serde_json::from_value(value),
            Some(EventBody::Encoded(text)) if base64 => {
                let bytes = STANDARD
                    .decode(text.trim())
                    .map_err(|e| DecodeError::Body(e.to_string()))?;
                if bytes.iter().all(u8::is_ascii_whitespace) {
                    return Ok(T::default());
                }
                serde_json::from_slice(&bytes)
            }
            Some(EventBody::Encoded(text)) => {
                if text.trim().is_empty() {
                    return Ok(T::default());
                }
                serde_json::from_str(&text)
            }
        };

        parsed.map_err(|e| DecodeError::Body(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{CreateItemRequest, DeleteItemRequest, UpdateItemRequest};
    use serde_json::json;

    #[test]
    fn test_string_body_is_parsed() {
        let event = GatewayEvent::with_encoded_body(r#"{"name": "A", "description": "B"}"#);
        let request: CreateItemRequest = event.parse_body().unwrap();

        assert_eq!(request.name.as_deref(), Some("A"));
        assert_eq!(request.description.as_deref(), Some("B"));
    }

    #[test]
    fn test_object_body_is_used_directly() {
        let event = GatewayEvent::with_decoded_body(json!({"id": "item-1"}));
        let request: DeleteItemRequest = event.parse_body().unwrap();

        assert_eq!(request.id.as_deref(), Some("item-1"));
    }

    #[test]
    fn test_both_forms_agree() {
        let body = json!({"id": "item-1", "updates": {"name": "new"}});
        let from_string: UpdateItemRequest = GatewayEvent::with_encoded_body(body.to_string())
            .parse_body()
            .unwrap();
        let from_object: UpdateItemRequest = GatewayEvent::with_decoded_body(body)
            .parse_body()
            .unwrap();

        assert_eq!(from_string.validate(), from_object.validate());
    }

    #[test]
    fn test_base64_body_is_decoded() {
        let encoded = STANDARD.encode(r#"{"id": "item-9"}"#);
        let event = GatewayEvent::new(json!({
            "body": encoded,
            "isBase64Encoded": true
        }));

        let request: DeleteItemRequest = event.parse_body().unwrap();
        assert_eq!(request.id.as_deref(), Some("item-9"));
    }

    #[test]
    fn test_null_base64_flag_means_plain_text() {
        let event = GatewayEvent::new(json!({
            "body": "{\"id\": \"item-9\"}",
            "isBase64Encoded": null
        }));

        let request: DeleteItemRequest = event.parse_body().unwrap();
        assert_eq!(request.id.as_deref(), Some("item-9"));
    }

    #[test]
    fn test_missing_null_and_blank_bodies_default() {
        let missing = GatewayEvent::new(json!({"httpMethod": "GET"}));
        let null = GatewayEvent::new(json!({"body": null}));
        let blank = GatewayEvent::with_encoded_body("  ");

        for event in [missing, null, blank, GatewayEvent::default()] {
            let request: DeleteItemRequest = event.parse_body().unwrap();
            assert_eq!(request.id, None);
        }
    }

    #[test]
    fn test_malformed_json_is_body_decode_error() {
        let event = GatewayEvent::with_encoded_body("{not json");
        let result: Result<CreateItemRequest, _> = event.parse_body();

        assert!(matches!(result, Err(DecodeError::Body(_))));
    }

    #[test]
    fn test_wrong_field_type_is_body_decode_error() {
        let event = GatewayEvent::with_decoded_body(json!({"name": 12}));
        let result: Result<CreateItemRequest, _> = event.parse_body();

        assert!(matches!(result, Err(DecodeError::Body(_))));
    }

    #[test]
    fn test_non_object_payload_is_event_decode_error() {
        let event = GatewayEvent::new(json!(["not", "an", "event"]));
        let result: Result<CreateItemRequest, _> = event.parse_body();

        assert!(matches!(result, Err(DecodeError::Event(_))));
    }

    #[test]
    fn test_proxy_event_fields_are_ignored() {
        let event = GatewayEvent::new(json!({
            "resource": "/items",
            "httpMethod": "POST",
            "headers": {"Content-Type": "application/json"},
            "requestContext": {"stage": "prod"},
            "body": "{\"name\": \"A\"}",
            "isBase64Encoded": false
        }));

        let request: CreateItemRequest = event.parse_body().unwrap();
        assert_eq!(request.name.as_deref(), Some("A"));
    }
}
