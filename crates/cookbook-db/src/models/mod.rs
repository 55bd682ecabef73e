//! Database models - SQLx-compatible structs for PostgreSQL tables

mod recipe;
mod user;

pub use recipe::RecipeModel;
pub use user::UserModel;
