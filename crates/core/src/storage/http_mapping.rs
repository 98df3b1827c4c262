//! Pure functions for mapping handler errors to HTTP status codes.
//!
//! This module provides HTTP status code mappings for [`HandlerError`]
//! variants, following the Functional Core pattern - pure functions with no
//! side effects.

use crate::gateway::HandlerError;

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// Every storage fault is a server error.
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::ConnectionFailed(_) => 500,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::Serialization(_) => 500,
        RepositoryError::InvalidData(_) => 500,
    }
}

/// Maps a [`HandlerError`] to an HTTP status code.
///
/// - `Validation` -> 400 (Bad Request)
/// - `Operation` -> whatever [`repository_error_to_status_code`] says (500)
/// - `Malformed` -> 500 (undecodable payload)
///
/// # Examples
///
/// ```
/// use itemstore_core::gateway::HandlerError;
/// use itemstore_core::item::ValidationError;
/// use itemstore_core::storage::handler_error_to_status_code;
///
/// let error = HandlerError::from(ValidationError::MissingId);
/// assert_eq!(handler_error_to_status_code(&error), 400);
/// ```
pub fn handler_error_to_status_code(error: &HandlerError) -> u16 {
    match error {
        HandlerError::Validation(_) => 400,
        HandlerError::Operation(repo_error) => repository_error_to_status_code(repo_error),
        HandlerError::Malformed(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::DecodeError;
    use crate::item::ValidationError;

    #[test]
    fn test_connection_failed_maps_to_500() {
        let error = RepositoryError::ConnectionFailed("dispatch failure".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_invalid_data_maps_to_500() {
        let error = RepositoryError::InvalidData("item is missing 'id'".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_validation_maps_to_400() {
        for error in [
            ValidationError::MissingId,
            ValidationError::EmptyUpdates,
            ValidationError::EmptyFieldName,
            ValidationError::ProtectedField("id".to_string()),
        ] {
            assert_eq!(handler_error_to_status_code(&HandlerError::from(error)), 400);
        }
    }

    #[test]
    fn test_malformed_maps_to_500() {
        for error in [
            DecodeError::Body("trailing characters".to_string()),
            DecodeError::Event("invalid type: sequence, expected struct".to_string()),
        ] {
            assert_eq!(handler_error_to_status_code(&HandlerError::from(error)), 500);
        }
    }

    #[test]
    fn test_operation_maps_to_500() {
        let error = HandlerError::from(RepositoryError::QueryFailed("throttled".to_string()));
        assert_eq!(handler_error_to_status_code(&error), 500);
    }
}
