//! Profile controller.
//!
//! Single-record fetch and wholesale update, scoped to the current
//! session's token. The token is read from the store immediately before
//! each request; the controller does not verify one exists (having one
//! before dispatching is the presentation layer's responsibility).

use crate::gateway::ApiGateway;
use careerlink_core::Store;
use careerlink_core::profile::{Profile, ProfileEvent};
use std::sync::Arc;

pub struct ProfileController {
    store: Arc<Store>,
    gateway: Arc<dyn ApiGateway>,
}

impl ProfileController {
    pub fn new(store: Arc<Store>, gateway: Arc<dyn ApiGateway>) -> Self {
        Self { store, gateway }
    }

    /// Loads the profile. On failure the previously loaded value is kept;
    /// a stale read is acceptable.
    pub async fn fetch(&self) {
        self.store.dispatch_profile(ProfileEvent::FetchPending).await;
        let token = self.store.bearer_token().await;
        match self.gateway.fetch_profile(token.as_deref()).await {
            Ok(profile) => {
                self.store
                    .dispatch_profile(ProfileEvent::FetchFulfilled(profile))
                    .await;
            }
            Err(err) => {
                tracing::warn!("Profile fetch failed: {}", err);
                self.store
                    .dispatch_profile(ProfileEvent::FetchRejected(err))
                    .await;
            }
        }
    }

    /// Submits the complete record; the backend has no partial patch. The
    /// store takes whatever (possibly normalized) record the server
    /// returns. No optimistic write happens, so a failure rolls back
    /// nothing.
    pub async fn update(&self, profile: Profile) {
        self.store.dispatch_profile(ProfileEvent::UpdatePending).await;
        let token = self.store.bearer_token().await;
        match self.gateway.update_profile(token.as_deref(), &profile).await {
            Ok(profile) => {
                self.store
                    .dispatch_profile(ProfileEvent::UpdateFulfilled(profile))
                    .await;
            }
            Err(err) => {
                tracing::warn!("Profile update failed: {}", err);
                self.store
                    .dispatch_profile(ProfileEvent::UpdateRejected(err))
                    .await;
            }
        }
    }

    /// Clears a sticky error. Idempotent.
    pub async fn clear_error(&self) {
        self.store.dispatch_profile(ProfileEvent::ErrorCleared).await;
    }
}
