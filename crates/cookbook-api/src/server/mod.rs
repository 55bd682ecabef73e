//! Application assembly and server startup

use std::sync::Arc;

use axum::Router;
use cookbook_common::{AppConfig, AppError};
use cookbook_db::{create_pool, run_migrations, PgRecipeRepository, PgUserRepository};
use cookbook_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Assemble the router with middleware and state applied
pub fn create_app(state: AppState) -> Router {
    apply_middleware(create_router()).with_state(state)
}

/// Connect the pool, run migrations, and wire up the dependency graph
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let db_config = cookbook_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };

    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let recipe_repo = Arc::new(PgRecipeRepository::new(pool.clone()));
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let service_context = ServiceContext::new(pool, recipe_repo, user_repo);

    Ok(AppState::new(service_context, config))
}

/// Serve the application on the given address until shutdown
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Build everything from configuration and run the server
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();
    let state = create_app_state(config).await?;
    let app = create_app(state);
    run_server(app, &addr).await
}
