//! # cookbook-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    CreateRecipeRequest, CreateUserRequest, HealthResponse, ReadinessResponse, RecipeResponse,
    RecipeSearchResults, UpdateRecipeRequest, UserResponse,
};
pub use services::{RecipeService, ServiceContext, ServiceError, ServiceResult, UserService};
