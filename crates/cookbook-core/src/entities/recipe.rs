//! Recipe entity - a single catalog entry

use chrono::{DateTime, Utc};

use crate::error::DomainError;

/// Recipe entity
///
/// A recipe is exclusively associated with at most one submitting user.
/// Invariant: the label is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: i64,
    pub label: String,
    pub url: Option<String>,
    pub source: Option<String>,
    pub submitter_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Check if the label contains the keyword, case-insensitively
    pub fn label_matches(&self, keyword: &str) -> bool {
        self.label.to_lowercase().contains(&keyword.to_lowercase())
    }

    /// Apply a partial update, refreshing `updated_at`
    ///
    /// Fields absent from `changes` are left untouched.
    pub fn apply(&mut self, changes: &RecipeChanges) {
        if let Some(label) = &changes.label {
            self.label.clone_from(label);
        }
        if let Some(url) = &changes.url {
            self.url = Some(url.clone());
        }
        if let Some(source) = &changes.source {
            self.source = Some(source.clone());
        }
        if let Some(submitter_id) = changes.submitter_id {
            self.submitter_id = Some(submitter_id);
        }
        self.updated_at = Utc::now();
    }
}

/// Fields for creating a new recipe; the id and timestamps are assigned by storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub label: String,
    pub url: Option<String>,
    pub source: Option<String>,
    pub submitter_id: Option<i64>,
}

impl NewRecipe {
    /// Create a new recipe input, enforcing the non-empty label invariant
    pub fn new(
        label: String,
        url: Option<String>,
        source: Option<String>,
        submitter_id: Option<i64>,
    ) -> Result<Self, DomainError> {
        if label.trim().is_empty() {
            return Err(DomainError::EmptyLabel);
        }
        Ok(Self {
            label,
            url,
            source,
            submitter_id,
        })
    }
}

/// Partial update for a recipe; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeChanges {
    pub label: Option<String>,
    pub url: Option<String>,
    pub source: Option<String>,
    pub submitter_id: Option<i64>,
}

impl RecipeChanges {
    /// Check whether the update carries any field at all
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.url.is_none()
            && self.source.is_none()
            && self.submitter_id.is_none()
    }
}
