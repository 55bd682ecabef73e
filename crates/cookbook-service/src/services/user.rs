//! User service
//!
//! User record operations; removal cascades to the user's recipes.

use cookbook_core::entities::NewUser;
use tracing::{info, instrument};

use crate::dto::{CreateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch a single user by ID
    #[instrument(skip(self))]
    pub async fn fetch(&self, user_id: i64) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .get(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(UserResponse::from(&user))
    }

    /// Create a new user
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateUserRequest) -> ServiceResult<UserResponse> {
        let input = NewUser::from(request);
        let user = self.ctx.user_repo().create(&input).await?;
        info!(user_id = user.id, "User created");
        Ok(UserResponse::from(&user))
    }

    /// Remove a user and, with it, the recipes it submitted
    #[instrument(skip(self))]
    pub async fn remove(&self, user_id: i64) -> ServiceResult<UserResponse> {
        let removed = self.ctx.user_repo().remove(user_id).await?;
        info!(user_id, "User removed");
        Ok(UserResponse::from(&removed))
    }
}
