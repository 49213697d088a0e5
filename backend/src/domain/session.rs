//! Authenticated session identity and the admin gate.
//!
//! The session is a typed record stored under a single cookie key; callers
//! never poke at individual string-keyed values.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Role, User, UserId};

/// Identity carried by an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SessionUser {
    pub user_id: UserId,
    pub username: String,
    pub role: Role,
}

impl SessionUser {
    /// Whether the session may use administrative operations.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            role: user.role,
        }
    }
}

/// Outcome of the admin gate.
///
/// An anonymous caller and a signed-in customer are denied differently:
/// the first is sent to log in, the second is refused outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminAccess {
    Granted(SessionUser),
    LoginRequired,
    Forbidden,
}

/// Decide whether `session` may enter the administrative area.
///
/// # Examples
/// ```
/// use autoparts::domain::{AdminAccess, require_admin};
///
/// assert_eq!(require_admin(None), AdminAccess::LoginRequired);
/// ```
pub fn require_admin(session: Option<SessionUser>) -> AdminAccess {
    match session {
        None => AdminAccess::LoginRequired,
        Some(user) if user.is_admin() => AdminAccess::Granted(user),
        Some(_) => AdminAccess::Forbidden,
    }
}
