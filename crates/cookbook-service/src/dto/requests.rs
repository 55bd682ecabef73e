//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Recipe Requests
// ============================================================================

/// Create recipe request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRecipeRequest {
    #[validate(length(min = 1, max = 256, message = "Label must be 1-256 characters"))]
    pub label: String,

    #[validate(length(max = 256, message = "URL must be at most 256 characters"))]
    pub url: Option<String>,

    #[validate(length(max = 256, message = "Source must be at most 256 characters"))]
    pub source: Option<String>,

    pub submitter_id: Option<i64>,
}

/// Partial update for a recipe; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateRecipeRequest {
    #[validate(length(min = 1, max = 256, message = "Label must be 1-256 characters"))]
    pub label: Option<String>,

    #[validate(length(max = 256, message = "URL must be at most 256 characters"))]
    pub url: Option<String>,

    #[validate(length(max = 256, message = "Source must be at most 256 characters"))]
    pub source: Option<String>,

    pub submitter_id: Option<i64>,
}

// ============================================================================
// User Requests
// ============================================================================

/// Create user request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(max = 256, message = "First name must be at most 256 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 256, message = "Surname must be at most 256 characters"))]
    pub surname: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default)]
    pub is_superuser: bool,
}
