//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{health, recipes, users};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(recipe_routes()).merge(user_routes())
}

/// Recipe routes
fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route("/recipes", get(recipes::list_recipes))
        .route("/recipes", post(recipes::create_recipe))
        // Static segment takes precedence over the :recipe_id capture
        .route("/recipes/search", get(recipes::search_recipes))
        .route("/recipes/:recipe_id", get(recipes::fetch_recipe))
        .route("/recipes/:recipe_id", patch(recipes::update_recipe))
        .route("/recipes/:recipe_id", delete(recipes::delete_recipe))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::create_user))
        .route("/users/:user_id", get(users::get_user))
        .route("/users/:user_id", delete(users::delete_user))
}
