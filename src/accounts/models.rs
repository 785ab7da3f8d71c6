//! Account models.

use serde::{Deserialize, Serialize};

/// A stored signup credential.
///
/// The password is kept in plain text: this storefront has no
/// authentication authority behind it, and the credential list is scanned
/// linearly at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Chosen display name.
    pub username: String,
    /// Signup email, unique across the collection.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}

/// The signed-in user, as shown in the navigation greeting.
///
/// Informational only: it is never joined against the catalog or cart, and
/// the password never travels into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Display name.
    pub username: String,
    /// Email.
    pub email: String,
}
