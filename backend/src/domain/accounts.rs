//! Account domain services: registration, authentication and lookups.
//!
//! Implements the [`LoginService`], [`RegistrationService`] and
//! [`UsersQuery`] driving ports on top of a [`UserRepository`] and a
//! [`PasswordHasher`]. Inputs arrive as validated value types, so no hashing
//! or persistence call happens for a request that is already known to be bad.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    LoginService, PasswordHashError, PasswordHasher, RegistrationService, UserPersistenceError,
    UserRepository, UsersQuery,
};
use crate::domain::{
    Error, LoginCredentials, NewUser, RegistrationDetails, SERVICE_UNAVAILABLE_MESSAGE,
    SessionUser, User, UserId,
};

const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Account service implementing the account driving ports.
#[derive(Clone)]
pub struct AccountService<R, H> {
    users: Arc<R>,
    hasher: Arc<H>,
}

impl<R, H> AccountService<R, H> {
    /// Create a new service with the given repository and hasher.
    pub fn new(users: Arc<R>, hasher: Arc<H>) -> Self {
        Self { users, hasher }
    }
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            warn!(%message, "user repository unavailable");
            Error::service_unavailable(SERVICE_UNAVAILABLE_MESSAGE)
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::DuplicateUsername { username } => {
            Error::conflict(format!("username {username} is already taken"))
        }
    }
}

fn map_hash_error(error: PasswordHashError) -> Error {
    Error::internal(error.to_string())
}

#[async_trait]
impl<R, H> LoginService for AccountService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<SessionUser, Error> {
        let Some(credential) = self
            .users
            .find_credential_by_username(credentials.username())
            .await
            .map_err(map_persistence_error)?
        else {
            debug!(username = credentials.username(), "login for unknown user");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        };

        let matches = self
            .hasher
            .verify(credentials.password(), &credential.password_hash)
            .await
            .map_err(map_hash_error)?;
        if !matches {
            debug!(user_id = %credential.user.id, "login with wrong password");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        }

        info!(user_id = %credential.user.id, admin = credential.user.role.is_admin(), "user logged in");
        Ok(SessionUser::from(&credential.user))
    }
}

#[async_trait]
impl<R, H> RegistrationService for AccountService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    async fn register(&self, details: &RegistrationDetails) -> Result<User, Error> {
        let password_hash = self
            .hasher
            .hash(details.password())
            .await
            .map_err(map_hash_error)?;
        let new_user = NewUser {
            username: details.username().to_owned(),
            email: details.email().to_owned(),
            password_hash,
        };
        let user = self
            .users
            .insert(&new_user)
            .await
            .map_err(map_persistence_error)?;
        info!(user_id = %user.id, "user registered");
        Ok(user)
    }
}

#[async_trait]
impl<R, H> UsersQuery for AccountService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.users.list().await.map_err(map_persistence_error)
    }

    async fn find_user(&self, id: UserId) -> Result<User, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| Error::not_found(format!("user {id} not found")))
    }
}
