//! Career experience state machine.
//!
//! The list is keyed by `id` for update and delete matching. An update or
//! delete whose id matches nothing in the current list is a silent no-op;
//! the client tolerates a stale list rather than erroring.

use super::model::CareerExperience;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};

/// Transitions for the career experience list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CareerEvent {
    FetchPending,
    FetchFulfilled(Vec<CareerExperience>),
    FetchRejected(ApiError),
    AddPending,
    AddFulfilled(CareerExperience),
    AddRejected(ApiError),
    UpdatePending,
    UpdateFulfilled(CareerExperience),
    UpdateRejected(ApiError),
    DeletePending,
    /// Carries the id of the deleted record
    DeleteFulfilled(String),
    DeleteRejected(ApiError),
    ErrorCleared,
}

/// Snapshot of the career experience list.
///
/// Fetch replaces the list wholesale in server order; add appends at the
/// end; update splices in place; delete removes by id. No mutation ever
/// reorders the list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerState {
    pub experiences: Vec<CareerExperience>,
    pub is_loading: bool,
    pub error: Option<ApiError>,
}

impl CareerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one transition to the state.
    pub fn apply(&mut self, event: CareerEvent) {
        match event {
            CareerEvent::FetchPending
            | CareerEvent::AddPending
            | CareerEvent::UpdatePending
            | CareerEvent::DeletePending => {
                self.is_loading = true;
                self.error = None;
            }
            CareerEvent::FetchFulfilled(experiences) => {
                self.is_loading = false;
                self.error = None;
                self.experiences = experiences;
            }
            CareerEvent::AddFulfilled(experience) => {
                self.is_loading = false;
                self.error = None;
                self.experiences.push(experience);
            }
            CareerEvent::UpdateFulfilled(experience) => {
                self.is_loading = false;
                self.error = None;
                if let Some(slot) = self.experiences.iter_mut().find(|e| e.id == experience.id) {
                    *slot = experience;
                }
            }
            CareerEvent::DeleteFulfilled(id) => {
                self.is_loading = false;
                self.error = None;
                self.experiences.retain(|e| e.id.as_deref() != Some(id.as_str()));
            }
            CareerEvent::FetchRejected(error)
            | CareerEvent::AddRejected(error)
            | CareerEvent::UpdateRejected(error)
            | CareerEvent::DeleteRejected(error) => {
                self.is_loading = false;
                self.error = Some(error);
            }
            CareerEvent::ErrorCleared => {
                self.error = None;
            }
        }
    }
}
