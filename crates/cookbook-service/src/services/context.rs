//! Service context - dependency container for services
//!
//! Holds the repositories and the database pool needed by services. Built
//! once at startup and handed to the application state; no hidden globals.

use cookbook_core::traits::{DynRecipeRepository, DynUserRepository};
use cookbook_db::PgPool;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,
    recipe_repo: DynRecipeRepository,
    user_repo: DynUserRepository,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        recipe_repo: DynRecipeRepository,
        user_repo: DynUserRepository,
    ) -> Self {
        Self {
            pool,
            recipe_repo,
            user_repo,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the recipe repository
    pub fn recipe_repo(&self) -> &DynRecipeRepository {
        &self.recipe_repo
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &DynUserRepository {
        &self.user_repo
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext").finish_non_exhaustive()
    }
}
