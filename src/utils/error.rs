use std::fmt;

use mongodb::error::ErrorKind;

#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Malformed input to a write (wrong value types, bad references, empty update)
    ValidationError(String),
    /// Path identifier is not a well-formed ObjectId
    InvalidIdentifier(String),
    /// Connection or query failure
    StoreUnavailable(String),
    Unauthorized(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::InvalidIdentifier(msg) => write!(f, "Invalid identifier: {}", msg),
            AppError::StoreUnavailable(msg) => write!(f, "Store unavailable: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        match err.kind.as_ref() {
            // Write failures are the server refusing the document itself
            ErrorKind::Write(_) | ErrorKind::BsonSerialization(_) => {
                AppError::ValidationError(err.to_string())
            }
            _ => AppError::StoreUnavailable(err.to_string()),
        }
    }
}

impl From<mongodb::bson::ser::Error> for AppError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_message() {
        let err = AppError::InvalidIdentifier("abc".to_string());
        assert_eq!(err.to_string(), "Invalid identifier: abc");

        let err = AppError::StoreUnavailable("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
    }
}
