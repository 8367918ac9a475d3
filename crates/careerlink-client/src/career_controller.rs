//! Career experience controller.
//!
//! List fetch plus add/update/delete of individual records. The local
//! list is mutated only on fulfilled responses; there is no optimistic
//! insertion, no duplicate detection, and no reordering.

use crate::gateway::ApiGateway;
use careerlink_core::Store;
use careerlink_core::career::{CareerEvent, CareerExperience};
use std::sync::Arc;

pub struct CareerController {
    store: Arc<Store>,
    gateway: Arc<dyn ApiGateway>,
}

impl CareerController {
    pub fn new(store: Arc<Store>, gateway: Arc<dyn ApiGateway>) -> Self {
        Self { store, gateway }
    }

    /// Replaces the whole local list with the server's, in server order.
    pub async fn fetch_all(&self) {
        self.store.dispatch_career(CareerEvent::FetchPending).await;
        let token = self.store.bearer_token().await;
        match self.gateway.list_experiences(token.as_deref()).await {
            Ok(experiences) => {
                self.store
                    .dispatch_career(CareerEvent::FetchFulfilled(experiences))
                    .await;
            }
            Err(err) => {
                tracing::warn!("Career list fetch failed: {}", err);
                self.store
                    .dispatch_career(CareerEvent::FetchRejected(err))
                    .await;
            }
        }
    }

    /// Persists a new experience (submitted without an id) and appends the
    /// server-returned record, id assigned, at the end of the list.
    pub async fn add(&self, experience: CareerExperience) {
        self.store.dispatch_career(CareerEvent::AddPending).await;
        let token = self.store.bearer_token().await;
        match self.gateway.add_experience(token.as_deref(), &experience).await {
            Ok(created) => {
                self.store
                    .dispatch_career(CareerEvent::AddFulfilled(created))
                    .await;
            }
            Err(err) => {
                tracing::warn!("Career add failed: {}", err);
                self.store
                    .dispatch_career(CareerEvent::AddRejected(err))
                    .await;
            }
        }
    }

    /// Updates an existing experience; the record must carry its persisted
    /// id. A fulfilled response whose id matches nothing locally is a
    /// silent no-op (the reducer tolerates a stale list).
    pub async fn update(&self, experience: CareerExperience) {
        self.store.dispatch_career(CareerEvent::UpdatePending).await;
        let token = self.store.bearer_token().await;
        match self
            .gateway
            .update_experience(token.as_deref(), &experience)
            .await
        {
            Ok(updated) => {
                self.store
                    .dispatch_career(CareerEvent::UpdateFulfilled(updated))
                    .await;
            }
            Err(err) => {
                tracing::warn!("Career update failed: {}", err);
                self.store
                    .dispatch_career(CareerEvent::UpdateRejected(err))
                    .await;
            }
        }
    }

    /// Deletes by id; a fulfilled response removes the matching entry, and
    /// a non-matching id removes nothing.
    pub async fn delete(&self, id: impl Into<String>) {
        self.store.dispatch_career(CareerEvent::DeletePending).await;
        let id = id.into();
        let token = self.store.bearer_token().await;
        match self.gateway.delete_experience(token.as_deref(), &id).await {
            Ok(deleted_id) => {
                self.store
                    .dispatch_career(CareerEvent::DeleteFulfilled(deleted_id))
                    .await;
            }
            Err(err) => {
                tracing::warn!("Career delete failed: {}", err);
                self.store
                    .dispatch_career(CareerEvent::DeleteRejected(err))
                    .await;
            }
        }
    }

    /// Clears a sticky error. Idempotent.
    pub async fn clear_error(&self) {
        self.store.dispatch_career(CareerEvent::ErrorCleared).await;
    }
}
