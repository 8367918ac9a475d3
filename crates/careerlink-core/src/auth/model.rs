//! Authentication domain models.
//!
//! Contains the authenticated identity and the request payloads the
//! credential-exchange endpoints accept.

use serde::{Deserialize, Serialize};

/// The identity record returned by a successful login or signup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// An authenticated session: the identity plus its bearer credential.
///
/// The two always travel together; a session either exists with both or
/// does not exist at all. This is what makes "user set ⇔ token set" hold
/// by construction in [`AuthState`](super::AuthState).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: User,
    /// Opaque bearer credential attached to authenticated requests
    pub token: String,
}

/// Login request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Signup request payload.
///
/// The core performs no validation on these fields (password confirmation,
/// terms acceptance and the like are the presentation layer's job before
/// this record is ever built).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}
