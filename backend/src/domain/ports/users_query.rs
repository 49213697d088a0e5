//! Driving port for user-facing queries.
//!
//! Inbound adapters use this port to read account data without importing
//! outbound persistence concerns. None of the returned values carry password
//! hashes.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every registered user.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// A single user, or [`crate::domain::ErrorCode::NotFound`].
    async fn find_user(&self, id: UserId) -> Result<User, Error>;
}
