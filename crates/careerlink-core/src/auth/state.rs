//! Authentication state machine.
//!
//! `AuthState` is the resource snapshot for the session; `AuthEvent` is the
//! set of transitions a login, signup or logout operation can produce.
//! `apply` is the reducer: a pure state transition with no I/O.

use super::model::{AuthSession, User};
use crate::error::ApiError;
use serde::{Deserialize, Serialize};

/// Transitions for the authentication resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AuthEvent {
    LoginPending,
    LoginFulfilled(AuthSession),
    LoginRejected(ApiError),
    SignupPending,
    SignupFulfilled(AuthSession),
    SignupRejected(ApiError),
    /// Unconditional local teardown; no network round-trip is involved.
    LoggedOut,
    ErrorCleared,
}

/// Snapshot of the authentication resource.
///
/// Created empty at process start. A successful login or signup populates
/// `session`; logout drops it. `error` is sticky: it stays set until the
/// consumer dispatches [`AuthEvent::ErrorCleared`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthState {
    pub session: Option<AuthSession>,
    pub is_loading: bool,
    pub error: Option<ApiError>,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The authenticated identity, if any.
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    /// The bearer token, if authenticated.
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Applies one transition to the state.
    pub fn apply(&mut self, event: AuthEvent) {
        match event {
            AuthEvent::LoginPending | AuthEvent::SignupPending => {
                self.is_loading = true;
                self.error = None;
            }
            AuthEvent::LoginFulfilled(session) | AuthEvent::SignupFulfilled(session) => {
                self.is_loading = false;
                self.error = None;
                self.session = Some(session);
            }
            AuthEvent::LoginRejected(error) | AuthEvent::SignupRejected(error) => {
                self.is_loading = false;
                self.error = Some(error);
            }
            AuthEvent::LoggedOut => {
                self.session = None;
            }
            AuthEvent::ErrorCleared => {
                self.error = None;
            }
        }
    }
}
