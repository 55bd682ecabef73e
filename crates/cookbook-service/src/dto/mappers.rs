//! Entity <-> DTO mappers

use cookbook_core::entities::{NewRecipe, NewUser, Recipe, RecipeChanges, User};
use cookbook_core::DomainError;

use super::requests::{CreateRecipeRequest, CreateUserRequest, UpdateRecipeRequest};
use super::responses::{RecipeResponse, UserResponse};

impl From<&Recipe> for RecipeResponse {
    fn from(recipe: &Recipe) -> Self {
        RecipeResponse {
            id: recipe.id,
            label: recipe.label.clone(),
            url: recipe.url.clone(),
            source: recipe.source.clone(),
            submitter_id: recipe.submitter_id,
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        UserResponse {
            id: user.id,
            first_name: user.first_name.clone(),
            surname: user.surname.clone(),
            email: user.email.clone(),
            is_superuser: user.is_superuser,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl TryFrom<CreateRecipeRequest> for NewRecipe {
    type Error = DomainError;

    fn try_from(request: CreateRecipeRequest) -> Result<Self, Self::Error> {
        NewRecipe::new(
            request.label,
            request.url,
            request.source,
            request.submitter_id,
        )
    }
}

impl From<UpdateRecipeRequest> for RecipeChanges {
    fn from(request: UpdateRecipeRequest) -> Self {
        RecipeChanges {
            label: request.label,
            url: request.url,
            source: request.source,
            submitter_id: request.submitter_id,
        }
    }
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        NewUser {
            first_name: request.first_name,
            surname: request.surname,
            email: request.email,
            is_superuser: request.is_superuser,
        }
    }
}
