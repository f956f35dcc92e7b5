//! Catalog Controller
//!
//! The page's operations: list loading, create-or-update submit, edit
//! and delete. Failures are logged and never surfaced in the UI.

use crate::api::MotorcycleApi;
use crate::models::{DraftField, Motorcycle};
use crate::store::CatalogHandle;

/// Operations over one API client and one state handle
#[derive(Clone)]
pub struct Catalog<A, H> {
    api: A,
    state: H,
}

impl<A, H> Catalog<A, H>
where
    A: MotorcycleApi + Clone + 'static,
    H: CatalogHandle,
{
    pub fn new(api: A, state: H) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &H {
        &self.state
    }

    /// Replace the list with the backend's. Keeps the old list on failure.
    pub async fn load(&self) {
        match self.api.list().await {
            Ok(motorcycles) => {
                tracing::debug!(count = motorcycles.len(), "loaded motorcycles");
                self.state.set_motorcycles(motorcycles);
            }
            Err(e) => tracing::error!("❌ failed to load motorcycles: {e}"),
        }
    }

    /// Create or update from the draft, then reset the form and reload.
    ///
    /// The form resets even when the call fails.
    pub async fn submit(&self) {
        let (draft, editing_id) = self
            .state
            .with_catalog(|s| (s.draft.clone(), s.editing_id.clone()));

        let result = match &editing_id {
            Some(id) => self.api.update(id, &draft).await,
            None => self.api.create(&draft).await,
        };
        match result {
            Ok(()) => tracing::info!(editing_id = ?editing_id, name = %draft.name, "saved motorcycle"),
            Err(e) => tracing::error!("❌ failed to save motorcycle: {e}"),
        }

        self.state.reset_form();
        self.load().await;
    }

    /// Put a record into the form. No network call.
    pub fn edit(&self, motorcycle: &Motorcycle) {
        self.state.begin_edit(motorcycle);
    }

    /// Delete by id, then reload. The form is left alone.
    pub async fn delete(&self, id: &str) {
        match self.api.delete(id).await {
            Ok(()) => tracing::info!(id, "deleted motorcycle"),
            Err(e) => tracing::error!("❌ failed to delete motorcycle {id}: {e}"),
        }
        self.load().await;
    }

    pub fn set_field(&self, field: DraftField) {
        self.state.set_field(field);
    }
}
