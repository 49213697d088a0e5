//! PostgreSQL-backed `UserRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Credential, NewUser, User, UserId, UserValidationError};

use super::diesel_error_mapping::{user_diesel_error, user_pool_error};
use super::models::{CredentialRow, NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed account store.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn corrupt_row(error: UserValidationError) -> UserPersistenceError {
    UserPersistenceError::query(format!("stored user is invalid: {error}"))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(user_pool_error)?;

        let row: UserRow = diesel::insert_into(users::table)
            .values(NewUserRow::from(user))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| user_diesel_error(err, Some(&user.username)))?;

        User::try_from(row).map_err(corrupt_row)
    }

    async fn find_credential_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Credential>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(user_pool_error)?;

        let row: Option<CredentialRow> = users::table
            .filter(users::username.eq(username))
            .select(CredentialRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| user_diesel_error(err, None))?;

        row.map(Credential::try_from).transpose().map_err(corrupt_row)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(user_pool_error)?;

        let row: Option<UserRow> = users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| user_diesel_error(err, None))?;

        row.map(User::try_from).transpose().map_err(corrupt_row)
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(user_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .order(users::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| user_diesel_error(err, None))?;

        rows.into_iter()
            .map(|row| User::try_from(row).map_err(corrupt_row))
            .collect()
    }
}
