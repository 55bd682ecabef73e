//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines the CRUD interface it needs, and the
//! infrastructure layer provides one conforming implementation per entity.

use std::sync::Arc;

use async_trait::async_trait;

use crate::entities::{NewRecipe, NewUser, Recipe, RecipeChanges, User, UserChanges};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Generic CRUD access over a persisted entity.
///
/// Each operation owns its connection acquisition and transaction scope;
/// nothing spans multiple calls. Implementations use soft delete uniformly:
/// removed records stay in storage but are invisible to every read.
#[async_trait]
pub trait CrudRepository: Send + Sync {
    /// The persisted entity type
    type Entity;
    /// Input for creating a new record
    type Create;
    /// Partial update input; absent fields are left untouched
    type Update;

    /// Fetch a single record by primary key, `None` when absent
    async fn get(&self, id: i64) -> RepoResult<Option<Self::Entity>>;

    /// Fetch up to `limit` records starting after `skip`, in stable id
    /// order. Callers must not assume anything richer than that.
    async fn get_multi(&self, skip: i64, limit: i64) -> RepoResult<Vec<Self::Entity>>;

    /// Persist a new record and return it with generated fields populated
    async fn create(&self, input: &Self::Create) -> RepoResult<Self::Entity>;

    /// Apply a partial update and return the updated record
    async fn update(
        &self,
        entity: &Self::Entity,
        changes: &Self::Update,
    ) -> RepoResult<Self::Entity>;

    /// Remove the record by id and return its last-known state.
    ///
    /// Fails with a not-found error when no live record has this id.
    async fn remove(&self, id: i64) -> RepoResult<Self::Entity>;
}

/// Shared handle to a recipe repository
pub type DynRecipeRepository =
    Arc<dyn CrudRepository<Entity = Recipe, Create = NewRecipe, Update = RecipeChanges>>;

/// Shared handle to a user repository
pub type DynUserRepository =
    Arc<dyn CrudRepository<Entity = User, Create = NewUser, Update = UserChanges>>;
