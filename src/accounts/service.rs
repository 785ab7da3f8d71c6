//! Accounts service: signup, login, and the current session.

use tracing::debug;

use crate::storage::{Store, keys};

use super::errors::{LoginError, SignupError};
use super::models::{Credential, Session};

const MIN_PASSWORD_CHARS: usize = 6;

/// Signup, login, and session management over the credential collection.
#[derive(Debug, Clone)]
pub struct AccountsService {
    store: Store,
}

impl AccountsService {
    /// Create an accounts service over the given store.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Register a new account and sign it in.
    ///
    /// # Errors
    ///
    /// Checks run in form order and the first failure wins: blank fields,
    /// then mismatched confirmation, then password length, then a duplicate
    /// email (which fails regardless of the other fields).
    pub fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
        confirm: &str,
    ) -> Result<Session, SignupError> {
        if username.is_empty() || email.is_empty() || password.is_empty() || confirm.is_empty() {
            return Err(SignupError::MissingFields);
        }

        if password != confirm {
            return Err(SignupError::PasswordMismatch);
        }

        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(SignupError::PasswordTooShort);
        }

        let mut credentials = self.credentials();

        if credentials.iter().any(|c| c.email == email) {
            return Err(SignupError::EmailTaken);
        }

        credentials.push(Credential {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        });

        self.store.write(keys::CREDENTIALS, &credentials);

        debug!(username, "account created");

        Ok(self.start_session(username, email))
    }

    /// Sign in with an email or username.
    ///
    /// # Errors
    ///
    /// Any mismatch collapses into [`LoginError::InvalidCredentials`];
    /// blank inputs short-circuit with [`LoginError::MissingFields`].
    pub fn login(&self, identifier: &str, password: &str) -> Result<Session, LoginError> {
        if identifier.is_empty() || password.is_empty() {
            return Err(LoginError::MissingFields);
        }

        let credentials = self.credentials();

        let matched = credentials
            .iter()
            .find(|c| (c.email == identifier || c.username == identifier) && c.password == password)
            .ok_or(LoginError::InvalidCredentials)?;

        Ok(self.start_session(&matched.username, &matched.email))
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn current(&self) -> Option<Session> {
        self.store.read(keys::SESSION)
    }

    /// Sign out by deleting the session record.
    pub fn logout(&self) {
        self.store.remove(keys::SESSION);
    }

    fn credentials(&self) -> Vec<Credential> {
        self.store.read(keys::CREDENTIALS)
    }

    fn start_session(&self, username: &str, email: &str) -> Session {
        let session = Session {
            username: username.to_string(),
            email: email.to_string(),
        };

        // Setting the session overwrites any previous one.
        self.store.write(keys::SESSION, &session);

        session
    }
}
