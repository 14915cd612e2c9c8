//! Unified error handling.
//!
//! Store failures pass through untouched; the only error the services raise
//! themselves is an unknown login (plus credential and validation failures).

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication
    #[error("User not found with username: {0}")]
    UnknownUser(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    // Validation
    #[error("{0}")]
    Validation(String),

    // Store failures (connectivity, timeout, malformed row)
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::UnknownUser(_) => "UNKNOWN_USER",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::Validation(_) => "VALIDATION_ERROR",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),

            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            _ => self.to_string(),
        }
    }

    /// Check if the error came from the backing store
    pub fn is_store_failure(&self) -> bool {
        match self {
            #[cfg(feature = "database")]
            AppError::Database(_) => true,
            _ => false,
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::Password(msg) => AppError::Validation(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn unknown_user(login: impl Into<String>) -> Self {
        AppError::UnknownUser(login.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_user_carries_login() {
        let err = AppError::unknown_user("nobody@x");
        assert!(matches!(&err, AppError::UnknownUser(login) if login == "nobody@x"));
        assert_eq!(err.to_string(), "User not found with username: nobody@x");
        assert_eq!(err.code(), "UNKNOWN_USER");
    }

    #[test]
    fn test_domain_error_conversion() {
        let err: AppError = DomainError::validation("bad report type").into();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.user_message(), "bad report type");

        let err: AppError = DomainError::password("too short").into();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_internal_message_is_hidden() {
        let err = AppError::internal("pool poisoned");
        assert_eq!(err.user_message(), "An internal error occurred");
        assert!(!err.is_store_failure());
    }
}
