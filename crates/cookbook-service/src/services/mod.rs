//! Service layer
//!
//! Services hold the request-scoped business logic between the HTTP handlers
//! and the repositories.

mod context;
mod error;
mod recipe;
mod user;

pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use recipe::RecipeService;
pub use user::UserService;
