//! Outgoing gateway response.
//!
//! Every handler answers with the same envelope: a status code, a fixed set
//! of JSON and CORS headers, and a JSON-encoded [`ResponseBody`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET,POST,PUT,DELETE,OPTIONS";
pub const ALLOW_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token,X-Requested-With";
pub const ALLOW_CREDENTIALS: &str = "true";

/// Headers attached to every response.
pub fn default_headers() -> BTreeMap<String, String> {
    [
        ("Content-Type", "application/json"),
        ("Access-Control-Allow-Origin", ALLOW_ORIGIN),
        ("Access-Control-Allow-Methods", ALLOW_METHODS),
        ("Access-Control-Allow-Headers", ALLOW_HEADERS),
        ("Access-Control-Allow-Credentials", ALLOW_CREDENTIALS),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value.to_string()))
    .collect()
}

/// JSON body of every response.
///
/// Exactly one of `item`, `data`, `message` or `error` is the payload;
/// `message` also accompanies a created `item`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseBody<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ResponseBody<T> {
    /// A freshly created item plus a confirmation message.
    pub fn created(message: impl Into<String>, item: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            item: Some(item),
            data: None,
            error: None,
        }
    }

    /// A successful result carried under `data`.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            item: None,
            data: Some(data),
            error: None,
        }
    }
}

impl ResponseBody<()> {
    /// A success acknowledgment without payload.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            item: None,
            data: None,
            error: None,
        }
    }

    /// A failure with its description.
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            item: None,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Response in the shape API Gateway expects from a proxy integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl GatewayResponse {
    /// Serializes `body` as the JSON payload.
    ///
    /// Falls back to a 500 with a fixed error body if `body` cannot be
    /// serialized.
    pub fn json<T: Serialize>(status_code: u16, body: &ResponseBody<T>) -> Self {
        match serde_json::to_string(body) {
            Ok(body) => Self {
                status_code,
                headers: default_headers(),
                body,
            },
            Err(e) => Self {
                status_code: 500,
                headers: default_headers(),
                body: serde_json::json!({
                    "success": false,
                    "error": format!("Failed to serialize response: {e}"),
                })
                .to_string(),
            },
        }
    }

    /// A 200 response.
    pub fn ok<T: Serialize>(body: &ResponseBody<T>) -> Self {
        Self::json(200, body)
    }

    /// Decodes the body back into JSON.
    pub fn body_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_str(&self.body)
    }
}
