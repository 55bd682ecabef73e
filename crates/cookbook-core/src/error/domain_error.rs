//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // Not found
    #[error("Recipe with ID {0} not found")]
    RecipeNotFound(i64),

    #[error("User with ID {0} not found")]
    UserNotFound(i64),

    // Validation
    #[error("Recipe label must not be empty")]
    EmptyLabel,

    #[error("Validation error: {0}")]
    Validation(String),

    // Infrastructure (wrapped)
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::RecipeNotFound(_) => "UNKNOWN_RECIPE",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::EmptyLabel => "EMPTY_LABEL",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RecipeNotFound(_) | Self::UserNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyLabel | Self::Validation(_))
    }
}
