//! # cookbook-db
//!
//! Database layer implementing the CRUD repository trait with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository trait
//! defined in `cookbook-core`. It handles:
//!
//! - Connection pool construction and startup migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cookbook_db::pool::{create_pool, DatabaseConfig};
//! use cookbook_db::repositories::PgRecipeRepository;
//! use cookbook_core::CrudRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig {
//!         url: "postgresql://localhost/cookbook".to_string(),
//!         ..DatabaseConfig::default()
//!     };
//!     let pool = create_pool(&config).await?;
//!     let recipes = PgRecipeRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgRecipeRepository, PgUserRepository};
