//! Error handling utilities for repositories

use cookbook_core::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::Database(e.to_string())
}

/// Create a "recipe not found" error
pub fn recipe_not_found(id: i64) -> DomainError {
    DomainError::RecipeNotFound(id)
}

/// Create a "user not found" error
pub fn user_not_found(id: i64) -> DomainError {
    DomainError::UserNotFound(id)
}
