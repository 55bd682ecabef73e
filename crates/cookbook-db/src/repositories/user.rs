//! PostgreSQL implementation of the user repository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use cookbook_core::entities::{NewUser, User, UserChanges};
use cookbook_core::traits::{CrudRepository, RepoResult};

use crate::models::UserModel;

use super::error::{map_db_error, user_not_found};

/// PostgreSQL-backed user repository
///
/// Removing a user also removes the recipes it submitted, in the same
/// transaction (users own their recipes).
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for PgUserRepository {
    type Entity = User;
    type Create = NewUser;
    type Update = UserChanges;

    #[instrument(skip(self))]
    async fn get(&self, id: i64) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, first_name, surname, email, is_superuser,
                   created_at, updated_at, deleted_at, deleted
            FROM users
            WHERE id = $1 AND deleted = FALSE
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn get_multi(&self, skip: i64, limit: i64) -> RepoResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, first_name, surname, email, is_superuser,
                   created_at, updated_at, deleted_at, deleted
            FROM users
            WHERE deleted = FALSE
            ORDER BY id
            OFFSET $1 LIMIT $2
            ",
        )
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self, input))]
    async fn create(&self, input: &NewUser) -> RepoResult<User> {
        let row = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (first_name, surname, email, is_superuser)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, surname, email, is_superuser,
                      created_at, updated_at, deleted_at, deleted
            ",
        )
        .bind(&input.first_name)
        .bind(&input.surname)
        .bind(&input.email)
        .bind(input.is_superuser)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(User::from(row))
    }

    #[instrument(skip(self, entity, changes))]
    async fn update(&self, entity: &User, changes: &UserChanges) -> RepoResult<User> {
        let mut updated = entity.clone();
        updated.apply(changes);

        let row = sqlx::query_as::<_, UserModel>(
            r"
            UPDATE users
            SET first_name = $2, surname = $3, email = $4, is_superuser = $5, updated_at = $6
            WHERE id = $1 AND deleted = FALSE
            RETURNING id, first_name, surname, email, is_superuser,
                      created_at, updated_at, deleted_at, deleted
            ",
        )
        .bind(updated.id)
        .bind(&updated.first_name)
        .bind(&updated.surname)
        .bind(&updated.email)
        .bind(updated.is_superuser)
        .bind(updated.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(User::from).ok_or_else(|| user_not_found(entity.id))
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: i64) -> RepoResult<User> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Cascade: the user's recipes go with it
        sqlx::query(
            r"
            UPDATE recipes
            SET deleted = TRUE, deleted_at = NOW()
            WHERE submitter_id = $1 AND deleted = FALSE
            ",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let row = sqlx::query_as::<_, UserModel>(
            r"
            UPDATE users
            SET deleted = TRUE, deleted_at = NOW()
            WHERE id = $1 AND deleted = FALSE
            RETURNING id, first_name, surname, email, is_superuser,
                      created_at, updated_at, deleted_at, deleted
            ",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let user = row.map(User::from).ok_or_else(|| user_not_found(id))?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(user)
    }
}
