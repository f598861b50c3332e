//! Custom error types for the common library
//!
//! This module defines the authentication error taxonomy shared across the
//! application. Every variant carries a message that is shown to the end
//! user as-is, so the wording here is load-bearing: UI code and tests match
//! on these exact strings.

use thiserror::Error;

/// Errors surfaced by the authentication service
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    /// One or more input fields violated the validation schema
    #[error("{}", .0.join("; "))]
    Validation(Vec<String>),

    /// The rate limiter rejected the attempt; carries minutes until reset
    #[error("Too many login attempts. Please try again in {0} minutes.")]
    RateLimited(u64),

    /// No user record matched the given email or ID
    #[error("No account found with this email address.")]
    NotFound,

    /// Password verification against the stored digest failed
    #[error("Incorrect password.")]
    InvalidCredentials,

    /// Sign-up collision on an already-registered email
    #[error("User with this email already exists.")]
    DuplicateUser,

    /// Unexpected internal failure; the detail string is logged, not shown
    #[error("Something went wrong. Please try again.")]
    Internal(String),
}

impl AuthError {
    /// Build a validation error from a single field violation
    pub fn validation(message: impl Into<String>) -> Self {
        AuthError::Validation(vec![message.into()])
    }
}

/// Type alias for Result with AuthError
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_facing_messages_are_stable() {
        assert_eq!(
            AuthError::RateLimited(12).to_string(),
            "Too many login attempts. Please try again in 12 minutes."
        );
        assert_eq!(
            AuthError::NotFound.to_string(),
            "No account found with this email address."
        );
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Incorrect password.");
        assert_eq!(
            AuthError::DuplicateUser.to_string(),
            "User with this email already exists."
        );
    }

    #[test]
    fn validation_error_joins_all_violations_in_order() {
        let err = AuthError::Validation(vec![
            "email: Email is required".to_string(),
            "password: Password is required".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "email: Email is required; password: Password is required"
        );
    }
}
