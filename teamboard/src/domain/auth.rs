//! Authentication primitives: login credentials and login failures.
//!
//! Keep raw input parsing outside the session model by exposing constructors
//! that validate string inputs before a front end talks to the model.

use std::fmt;

use thiserror::Error;
use zeroize::Zeroizing;

/// Domain error returned when login input values are missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Email was empty or whitespace only.
    EmptyEmail,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials handed to the credential store.
///
/// ## Invariants
/// - `email` must not be blank and is kept byte-for-byte, so lookups compare
///   exactly what the caller typed.
/// - `password` must not be empty and keeps caller-provided whitespace.
/// - No format or strength rules are applied.
///
/// # Examples
/// ```
/// use teamboard::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" manager@example.com ", "password123").unwrap();
/// assert_eq!(creds.email(), " manager@example.com ");
/// assert_eq!(creds.password(), "password123");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        if email.trim().is_empty() {
            return Err(LoginValidationError::EmptyEmail);
        }

        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email exactly as supplied by the caller.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password string provided by the caller.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Failures surfaced by [`SessionService::login`](crate::domain::SessionService::login).
///
/// The session is left exactly as it was whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AuthError {
    /// No account matches the email/password pair.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// The credential store could not answer the lookup.
    #[error("credential store unavailable: {message}")]
    CredentialStoreUnavailable {
        /// Adapter-provided failure description.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", LoginValidationError::EmptyEmail)]
    #[case("   ", "pw", LoginValidationError::EmptyEmail)]
    #[case("manager@example.com", "", LoginValidationError::EmptyPassword)]
    fn invalid_credentials(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: LoginValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(email, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case("  manager@example.com  ", "password123")]
    #[case("employee@example.com", " padded secret ")]
    fn valid_credentials_are_kept_verbatim(#[case] email: &str, #[case] password: &str) {
        let creds = LoginCredentials::try_from_parts(email, password)
            .expect("valid inputs should succeed");
        assert_eq!(creds.email(), email);
        assert_eq!(creds.password(), password);
    }

    #[rstest]
    fn debug_output_redacts_password() {
        let creds = LoginCredentials::try_from_parts("manager@example.com", "password123")
            .expect("valid inputs");
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("manager@example.com"));
        assert!(!rendered.contains("password123"));
    }
}
