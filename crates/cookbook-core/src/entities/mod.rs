//! Domain entities
//!
//! Persisted records share the same lifecycle fields: `created_at` is set at
//! construction and `updated_at` refreshed on every mutation. Soft-delete
//! bookkeeping lives in the database layer; entities only model live records.

mod recipe;
mod user;

pub use recipe::{NewRecipe, Recipe, RecipeChanges};
pub use user::{NewUser, User, UserChanges};
