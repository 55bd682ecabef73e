//! Recipe database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the recipes table
#[derive(Debug, Clone, FromRow)]
pub struct RecipeModel {
    pub id: i64,
    pub label: String,
    pub url: Option<String>,
    pub source: Option<String>,
    pub submitter_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted: bool,
}
