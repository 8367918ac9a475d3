//! Profile state machine.

use super::model::Profile;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};

/// Transitions for the profile resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProfileEvent {
    FetchPending,
    FetchFulfilled(Profile),
    FetchRejected(ApiError),
    UpdatePending,
    UpdateFulfilled(Profile),
    UpdateRejected(ApiError),
    ErrorCleared,
}

/// Snapshot of the profile resource.
///
/// A rejected fetch or update keeps the previously loaded profile; a stale
/// read is acceptable and there is nothing to roll back because no
/// optimistic write ever happens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileState {
    pub profile: Option<Profile>,
    pub is_loading: bool,
    pub error: Option<ApiError>,
}

impl ProfileState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one transition to the state.
    pub fn apply(&mut self, event: ProfileEvent) {
        match event {
            ProfileEvent::FetchPending | ProfileEvent::UpdatePending => {
                self.is_loading = true;
                self.error = None;
            }
            ProfileEvent::FetchFulfilled(profile) | ProfileEvent::UpdateFulfilled(profile) => {
                self.is_loading = false;
                self.error = None;
                self.profile = Some(profile);
            }
            ProfileEvent::FetchRejected(error) | ProfileEvent::UpdateRejected(error) => {
                self.is_loading = false;
                self.error = Some(error);
            }
            ProfileEvent::ErrorCleared => {
                self.error = None;
            }
        }
    }
}
