use thiserror::Error;

use crate::item::ValidationError;
use crate::storage::{handler_error_to_status_code, RepositoryError};

use super::event::DecodeError;
use super::response::{GatewayResponse, ResponseBody};

/// Everything a handler can fail with.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandlerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Operation(#[from] RepositoryError),
    #[error(transparent)]
    Malformed(#[from] DecodeError),
}

impl HandlerError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        handler_error_to_status_code(self)
    }

    /// Converts the error into the failure envelope, exposing its text.
    pub fn into_response(self) -> GatewayResponse {
        GatewayResponse::json(self.status_code(), &ResponseBody::error(self.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_response() {
        let response = HandlerError::from(ValidationError::MissingId).into_response();

        assert_eq!(response.status_code, 400);
        let body = response.body_json().unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Missing item ID");
    }

    #[test]
    fn test_operation_response_exposes_description() {
        let error = RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string());
        let response = HandlerError::from(error).into_response();

        assert_eq!(response.status_code, 500);
        let body = response.body_json().unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Query failed: Throughput exceeded, please retry");
    }

    #[test]
    fn test_malformed_payload_is_server_error() {
        let error = DecodeError::Body("key must be a string at line 1 column 2".to_string());
        let response = HandlerError::from(error).into_response();

        assert_eq!(response.status_code, 500);
        assert_eq!(
            response.body_json().unwrap()["error"],
            "Invalid request body: key must be a string at line 1 column 2"
        );
    }
}
