//! Repository implementations
//!
//! PostgreSQL implementations of the CRUD repository trait defined in
//! cookbook-core, one per domain entity.

mod error;
mod recipe;
mod user;

pub use recipe::PgRecipeRepository;
pub use user::PgUserRepository;
