//! PostgreSQL implementation of the recipe repository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use cookbook_core::entities::{NewRecipe, Recipe, RecipeChanges};
use cookbook_core::traits::{CrudRepository, RepoResult};

use crate::models::RecipeModel;

use super::error::{map_db_error, recipe_not_found};

/// PostgreSQL-backed recipe repository
#[derive(Clone)]
pub struct PgRecipeRepository {
    pool: PgPool,
}

impl PgRecipeRepository {
    /// Create a new PgRecipeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for PgRecipeRepository {
    type Entity = Recipe;
    type Create = NewRecipe;
    type Update = RecipeChanges;

    #[instrument(skip(self))]
    async fn get(&self, id: i64) -> RepoResult<Option<Recipe>> {
        let result = sqlx::query_as::<_, RecipeModel>(
            r"
            SELECT id, label, url, source, submitter_id,
                   created_at, updated_at, deleted_at, deleted
            FROM recipes
            WHERE id = $1 AND deleted = FALSE
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Recipe::from))
    }

    #[instrument(skip(self))]
    async fn get_multi(&self, skip: i64, limit: i64) -> RepoResult<Vec<Recipe>> {
        let rows = sqlx::query_as::<_, RecipeModel>(
            r"
            SELECT id, label, url, source, submitter_id,
                   created_at, updated_at, deleted_at, deleted
            FROM recipes
            WHERE deleted = FALSE
            ORDER BY id
            OFFSET $1 LIMIT $2
            ",
        )
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Recipe::from).collect())
    }

    #[instrument(skip(self, input))]
    async fn create(&self, input: &NewRecipe) -> RepoResult<Recipe> {
        let row = sqlx::query_as::<_, RecipeModel>(
            r"
            INSERT INTO recipes (label, url, source, submitter_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, label, url, source, submitter_id,
                      created_at, updated_at, deleted_at, deleted
            ",
        )
        .bind(&input.label)
        .bind(&input.url)
        .bind(&input.source)
        .bind(input.submitter_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Recipe::from(row))
    }

    #[instrument(skip(self, entity, changes))]
    async fn update(&self, entity: &Recipe, changes: &RecipeChanges) -> RepoResult<Recipe> {
        let mut updated = entity.clone();
        updated.apply(changes);

        let row = sqlx::query_as::<_, RecipeModel>(
            r"
            UPDATE recipes
            SET label = $2, url = $3, source = $4, submitter_id = $5, updated_at = $6
            WHERE id = $1 AND deleted = FALSE
            RETURNING id, label, url, source, submitter_id,
                      created_at, updated_at, deleted_at, deleted
            ",
        )
        .bind(updated.id)
        .bind(&updated.label)
        .bind(&updated.url)
        .bind(&updated.source)
        .bind(updated.submitter_id)
        .bind(updated.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(Recipe::from).ok_or_else(|| recipe_not_found(entity.id))
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: i64) -> RepoResult<Recipe> {
        let row = sqlx::query_as::<_, RecipeModel>(
            r"
            UPDATE recipes
            SET deleted = TRUE, deleted_at = NOW()
            WHERE id = $1 AND deleted = FALSE
            RETURNING id, label, url, source, submitter_id,
                      created_at, updated_at, deleted_at, deleted
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(Recipe::from).ok_or_else(|| recipe_not_found(id))
    }
}
