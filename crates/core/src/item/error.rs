use thiserror::Error;

/// Client-side faults in a request. Always answered with 400.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing item ID")]
    MissingId,
    #[error("No fields to update")]
    EmptyUpdates,
    #[error("Field '{0}' cannot be updated")]
    ProtectedField(String),
    #[error("Field names cannot be empty")]
    EmptyFieldName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::MissingId.to_string(), "Missing item ID");
        assert_eq!(
            ValidationError::ProtectedField("created_at".to_string()).to_string(),
            "Field 'created_at' cannot be updated"
        );
        assert_eq!(ValidationError::EmptyUpdates.to_string(), "No fields to update");
    }
}
