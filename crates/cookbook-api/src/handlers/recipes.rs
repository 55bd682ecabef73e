//! Recipe handlers
//!
//! Endpoints for fetching, searching, and mutating recipes.

use axum::{
    extract::{Path, State},
    Json,
};
use cookbook_service::{
    CreateRecipeRequest, RecipeResponse, RecipeSearchResults, RecipeService, UpdateRecipeRequest,
};

use crate::extractors::{ListQuery, SearchQuery, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Fetch a single recipe by ID
///
/// GET /recipes/{recipe_id}
pub async fn fetch_recipe(
    State(state): State<AppState>,
    Path(recipe_id): Path<i64>,
) -> ApiResult<Json<RecipeResponse>> {
    let service = RecipeService::new(state.service_context());
    let response = service.fetch(recipe_id).await?;
    Ok(Json(response))
}

/// List recipes with offset/limit paging
///
/// GET /recipes
pub async fn list_recipes(
    State(state): State<AppState>,
    query: ListQuery,
) -> ApiResult<Json<Vec<RecipeResponse>>> {
    let service = RecipeService::new(state.service_context());
    let recipes = service.list(query.skip, query.limit).await?;
    Ok(Json(recipes))
}

/// Search for recipes based on label keyword
///
/// GET /recipes/search?keyword=chicken&max_results=10
pub async fn search_recipes(
    State(state): State<AppState>,
    query: SearchQuery,
) -> ApiResult<Json<RecipeSearchResults>> {
    let service = RecipeService::new(state.service_context());
    let results = service
        .search(query.keyword.as_deref(), query.max_results)
        .await?;
    Ok(Json(results))
}

/// Create a new recipe
///
/// POST /recipes
pub async fn create_recipe(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateRecipeRequest>,
) -> ApiResult<Created<Json<RecipeResponse>>> {
    let service = RecipeService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// Apply a partial update to a recipe
///
/// PATCH /recipes/{recipe_id}
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(recipe_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateRecipeRequest>,
) -> ApiResult<Json<RecipeResponse>> {
    let service = RecipeService::new(state.service_context());
    let response = service.update(recipe_id, request).await?;
    Ok(Json(response))
}

/// Remove a recipe
///
/// DELETE /recipes/{recipe_id}
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(recipe_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = RecipeService::new(state.service_context());
    service.remove(recipe_id).await?;
    Ok(NoContent)
}
