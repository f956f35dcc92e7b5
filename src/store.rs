//! Catalog State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity: the table
//! only re-renders on list changes, the form only on draft changes.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{DraftField, Motorcycle};

/// Everything the page shows
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// Snapshot from the last successful list fetch
    pub motorcycles: Vec<Motorcycle>,
    /// Record bound to the form
    pub draft: Motorcycle,
    /// Routes submit to update when set
    pub editing_id: Option<String>,
}

/// Whether submitting the form creates or updates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
}

impl CatalogState {
    pub fn form_mode(&self) -> FormMode {
        form_mode(&self.editing_id)
    }
}

pub fn form_mode(editing_id: &Option<String>) -> FormMode {
    if editing_id.is_some() {
        FormMode::Update
    } else {
        FormMode::Create
    }
}

/// Type alias for the store
pub type CatalogStore = Store<CatalogState>;

/// Access to the catalog state from async operations.
///
/// Each write touches one field, so readers of the other fields are not
/// notified. Reads are untracked: operations run outside any reactive
/// scope.
pub trait CatalogHandle: Clone + 'static {
    fn with_catalog<R>(&self, f: impl FnOnce(&CatalogState) -> R) -> R;

    fn set_motorcycles(&self, motorcycles: Vec<Motorcycle>);

    fn update_draft(&self, f: impl FnOnce(&mut Motorcycle));

    fn set_editing_id(&self, editing_id: Option<String>);

    fn set_field(&self, field: DraftField) {
        self.update_draft(|draft| *draft = draft.with_field(field));
    }

    /// Load a record into the form and switch to update mode
    fn begin_edit(&self, motorcycle: &Motorcycle) {
        self.update_draft(|draft| *draft = motorcycle.clone());
        self.set_editing_id(motorcycle.id.clone());
    }

    /// Back to an empty draft in create mode
    fn reset_form(&self) {
        self.update_draft(|draft| *draft = Motorcycle::draft());
        self.set_editing_id(None);
    }
}

impl CatalogHandle for CatalogStore {
    fn with_catalog<R>(&self, f: impl FnOnce(&CatalogState) -> R) -> R {
        self.with_untracked(f)
    }

    fn set_motorcycles(&self, motorcycles: Vec<Motorcycle>) {
        self.motorcycles().set(motorcycles);
    }

    fn update_draft(&self, f: impl FnOnce(&mut Motorcycle)) {
        self.draft().update(f);
    }

    fn set_editing_id(&self, editing_id: Option<String>) {
        self.editing_id().set(editing_id);
    }
}

/// Non-reactive handle, for driving the catalog without a reactive owner
impl CatalogHandle for Rc<RefCell<CatalogState>> {
    fn with_catalog<R>(&self, f: impl FnOnce(&CatalogState) -> R) -> R {
        f(&self.borrow())
    }

    fn set_motorcycles(&self, motorcycles: Vec<Motorcycle>) {
        self.borrow_mut().motorcycles = motorcycles;
    }

    fn update_draft(&self, f: impl FnOnce(&mut Motorcycle)) {
        f(&mut self.borrow_mut().draft);
    }

    fn set_editing_id(&self, editing_id: Option<String>) {
        self.borrow_mut().editing_id = editing_id;
    }
}
