//! Authentication inputs: login credentials and registration details.
//!
//! Inbound payloads are validated here, before any port is touched, so a
//! malformed registration never reaches the password hasher or the store.

use zeroize::Zeroizing;

/// Minimum password length, counted in characters after trimming.
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Login payload failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    #[error("username must not be empty")]
    EmptyUsername,
    /// Password was missing or blank once trimmed.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Registration payload failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationValidationError {
    /// Username was blank once trimmed.
    #[error("username must not be empty")]
    EmptyUsername,
    /// Email was blank once trimmed.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Password was blank once trimmed.
    #[error("password must not be empty")]
    EmptyPassword,
    /// Password shorter than [`MIN_PASSWORD_CHARS`].
    #[error("password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}

/// Validated login credentials.
///
/// ## Invariants
/// - `username` and `password` are trimmed and non-empty. Registration trims
///   the password the same way, so the two stay comparable.
///
/// # Examples
/// ```
/// use autoparts::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" admin ", "secret").unwrap();
/// assert_eq!(creds.username(), "admin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }
        let password = password.trim();
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            username: username.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username used for the credential lookup.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Plain-text password to verify against the stored hash.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated sign-up request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationDetails {
    username: String,
    email: String,
    password: Zeroizing<String>,
}

impl RegistrationDetails {
    /// Trim and validate raw sign-up fields.
    ///
    /// # Examples
    /// ```
    /// use autoparts::domain::{RegistrationDetails, RegistrationValidationError};
    ///
    /// let err = RegistrationDetails::try_from_parts("bob", "bob@example.com", "12345")
    ///     .unwrap_err();
    /// assert_eq!(err, RegistrationValidationError::PasswordTooShort { min: 6 });
    /// ```
    pub fn try_from_parts(
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Self, RegistrationValidationError> {
        let username = username.trim();
        let email = email.trim();
        let password = password.trim();
        if username.is_empty() {
            return Err(RegistrationValidationError::EmptyUsername);
        }
        if email.is_empty() {
            return Err(RegistrationValidationError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(RegistrationValidationError::EmptyPassword);
        }
        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(RegistrationValidationError::PasswordTooShort {
                min: MIN_PASSWORD_CHARS,
            });
        }
        Ok(Self {
            username: username.to_owned(),
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Requested username.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Contact email.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Plain-text password awaiting hashing.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
