//! Account service errors.

use thiserror::Error;

/// Signup failures, surfaced one at a time as a single current message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignupError {
    /// A required field was left blank.
    #[error("Please fill in all fields")]
    MissingFields,

    /// The confirmation does not match the password.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// The password is shorter than six characters.
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    /// Another credential already uses this email.
    #[error("An account with this email already exists")]
    EmailTaken,
}

/// Login failures.
///
/// An unknown identifier and a wrong password are deliberately
/// indistinguishable, so the error never confirms whether an account
/// exists.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoginError {
    /// A required field was left blank.
    #[error("Please fill in all fields")]
    MissingFields,

    /// No credential matched the identifier/password pair.
    #[error("Invalid email/username or password")]
    InvalidCredentials,
}
