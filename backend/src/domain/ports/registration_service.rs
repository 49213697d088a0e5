//! Driving port for account sign-up.

use async_trait::async_trait;

use crate::domain::{Error, RegistrationDetails, User};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Hash the password and store a new standard account.
    ///
    /// A taken username fails with [`crate::domain::ErrorCode::Conflict`].
    async fn register(&self, details: &RegistrationDetails) -> Result<User, Error>;
}
