//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! The authenticated identity is stored as one typed [`SessionUser`] record.
//! Cookies that fail decryption are dropped by the session middleware; a
//! record that no longer decodes is treated here as "no session".

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{AdminAccess, Error, SessionUser, require_admin};

pub(crate) const SESSION_USER_KEY: &str = "user";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Store the authenticated identity, rotating the session id.
    pub fn persist_user(&self, user: &SessionUser) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(SESSION_USER_KEY, user)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// The identity carried by the cookie, if it holds a readable one.
    pub fn user(&self) -> Option<SessionUser> {
        match self.0.get::<SessionUser>(SESSION_USER_KEY) {
            Ok(user) => user,
            Err(error) => {
                warn!(%error, "discarding unreadable session identity");
                self.0.remove(SESSION_USER_KEY);
                None
            }
        }
    }

    /// Require a signed-in user or return `401 Unauthorized`.
    pub fn require_user(&self) -> Result<SessionUser, Error> {
        self.user()
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    /// Apply the admin gate to the current identity.
    pub fn admin_access(&self) -> AdminAccess {
        require_admin(self.user())
    }

    /// Admin gate for API routes: 401 when anonymous, 403 for non-admins.
    pub fn require_admin(&self) -> Result<SessionUser, Error> {
        match self.admin_access() {
            AdminAccess::Granted(user) => Ok(user),
            AdminAccess::LoginRequired => Err(Error::unauthorized("login required")),
            AdminAccess::Forbidden => Err(Error::forbidden("administrator role required")),
        }
    }

    /// Drop every value and expire the cookie.
    pub fn purge(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
