//! The process-wide state container.
//!
//! `Store` composes the three resource states behind read/write locks. It
//! is an explicit container handed to consumers by reference counting, not
//! a language-level singleton, so tests and embedders can run any number
//! of independent instances.

use crate::auth::{AuthEvent, AuthState};
use crate::career::{CareerEvent, CareerState};
use crate::profile::{ProfileEvent, ProfileState};
use tokio::sync::RwLock;

/// Container composing every resource state.
///
/// Reads hand out cloned snapshots so consumers never observe a state
/// mid-transition. Writes go through the `dispatch_*` methods, which apply
/// the resource's reducer under the write lock; one reducer application
/// completes before the next begins.
#[derive(Debug, Default)]
pub struct Store {
    auth: RwLock<AuthState>,
    profile: RwLock<ProfileState>,
    career: RwLock<CareerState>,
}

impl Store {
    /// Creates a store with every resource in its initial empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the authentication state.
    pub async fn auth(&self) -> AuthState {
        self.auth.read().await.clone()
    }

    /// Snapshot of the profile state.
    pub async fn profile(&self) -> ProfileState {
        self.profile.read().await.clone()
    }

    /// Snapshot of the career experience state.
    pub async fn career(&self) -> CareerState {
        self.career.read().await.clone()
    }

    /// The current bearer token, read fresh at call time.
    ///
    /// Controllers call this immediately before each authenticated request
    /// and never cache the result.
    pub async fn bearer_token(&self) -> Option<String> {
        self.auth.read().await.token().map(str::to_string)
    }

    /// Applies one authentication transition.
    pub async fn dispatch_auth(&self, event: AuthEvent) {
        self.auth.write().await.apply(event);
    }

    /// Applies one profile transition.
    pub async fn dispatch_profile(&self, event: ProfileEvent) {
        self.profile.write().await.apply(event);
    }

    /// Applies one career transition.
    pub async fn dispatch_career(&self, event: CareerEvent) {
        self.career.write().await.apply(event);
    }
}
