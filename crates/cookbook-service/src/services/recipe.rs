//! Recipe service
//!
//! Fetch, search, and mutation operations over the recipe catalog.

use cookbook_core::entities::{NewRecipe, Recipe, RecipeChanges};
use tracing::{info, instrument};

use crate::dto::{
    CreateRecipeRequest, RecipeResponse, RecipeSearchResults, UpdateRecipeRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Recipe service
pub struct RecipeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RecipeService<'a> {
    /// Create a new RecipeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch a single recipe by ID
    #[instrument(skip(self))]
    pub async fn fetch(&self, recipe_id: i64) -> ServiceResult<RecipeResponse> {
        let recipe = self
            .ctx
            .recipe_repo()
            .get(recipe_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Recipe", recipe_id.to_string()))?;

        Ok(RecipeResponse::from(&recipe))
    }

    /// List recipes with offset/limit paging
    #[instrument(skip(self))]
    pub async fn list(&self, skip: i64, limit: i64) -> ServiceResult<Vec<RecipeResponse>> {
        let recipes = self.ctx.recipe_repo().get_multi(skip, limit).await?;
        Ok(recipes.iter().map(RecipeResponse::from).collect())
    }

    /// Search recipes by label keyword.
    ///
    /// Loads the first `max_results` records and then filters that page for a
    /// case-insensitive substring match on the label. The filter runs after
    /// the limit, so a match beyond the initial page is not found; callers
    /// rely on that page-bounded behavior.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        keyword: Option<&str>,
        max_results: i64,
    ) -> ServiceResult<RecipeSearchResults> {
        let recipes = self.ctx.recipe_repo().get_multi(0, max_results).await?;

        let results = match keyword {
            None => recipes.iter().map(RecipeResponse::from).collect(),
            Some(keyword) => filter_by_keyword(&recipes, keyword)
                .take(usize::try_from(max_results).unwrap_or(usize::MAX))
                .map(RecipeResponse::from)
                .collect(),
        };

        Ok(RecipeSearchResults { results })
    }

    /// Create a new recipe
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateRecipeRequest) -> ServiceResult<RecipeResponse> {
        let input = NewRecipe::try_from(request)?;
        let recipe = self.ctx.recipe_repo().create(&input).await?;
        info!(recipe_id = recipe.id, "Recipe created");
        Ok(RecipeResponse::from(&recipe))
    }

    /// Apply a partial update to a recipe
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        recipe_id: i64,
        request: UpdateRecipeRequest,
    ) -> ServiceResult<RecipeResponse> {
        let recipe = self
            .ctx
            .recipe_repo()
            .get(recipe_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Recipe", recipe_id.to_string()))?;

        let changes = RecipeChanges::from(request);
        if changes.is_empty() {
            return Ok(RecipeResponse::from(&recipe));
        }

        let updated = self.ctx.recipe_repo().update(&recipe, &changes).await?;
        info!(recipe_id, "Recipe updated");
        Ok(RecipeResponse::from(&updated))
    }

    /// Remove a recipe, returning its last-known state
    #[instrument(skip(self))]
    pub async fn remove(&self, recipe_id: i64) -> ServiceResult<RecipeResponse> {
        let removed = self.ctx.recipe_repo().remove(recipe_id).await?;
        info!(recipe_id, "Recipe removed");
        Ok(RecipeResponse::from(&removed))
    }
}

/// Case-insensitive substring filter over recipe labels, preserving order
fn filter_by_keyword<'r>(
    recipes: &'r [Recipe],
    keyword: &'r str,
) -> impl Iterator<Item = &'r Recipe> {
    recipes.iter().filter(move |recipe| recipe.label_matches(keyword))
}
