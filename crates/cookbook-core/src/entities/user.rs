//! User entity - a recipe submitter

use chrono::{DateTime, Utc};

/// User entity
///
/// A user owns zero or more recipes; removing a user removes its recipes
/// as well (owning relationship, not a weak reference).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub first_name: Option<String>,
    pub surname: Option<String>,
    pub email: String,
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Display name: "first surname" when available, the email otherwise
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.surname) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.email.clone(),
        }
    }

    /// Apply a partial update, refreshing `updated_at`
    pub fn apply(&mut self, changes: &UserChanges) {
        if let Some(first_name) = &changes.first_name {
            self.first_name = Some(first_name.clone());
        }
        if let Some(surname) = &changes.surname {
            self.surname = Some(surname.clone());
        }
        if let Some(email) = &changes.email {
            self.email.clone_from(email);
        }
        if let Some(is_superuser) = changes.is_superuser {
            self.is_superuser = is_superuser;
        }
        self.updated_at = Utc::now();
    }
}

/// Fields for creating a new user; the id and timestamps are assigned by storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: Option<String>,
    pub surname: Option<String>,
    pub email: String,
    pub is_superuser: bool,
}

/// Partial update for a user; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub first_name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub is_superuser: Option<bool>,
}
