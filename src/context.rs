//! Application Context
//!
//! The catalog controller shared with every component via the Leptos
//! Context API.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpApi;
use crate::catalog::Catalog;
use crate::config::ApiConfig;
use crate::store::{CatalogState, CatalogStore};

/// Catalog wired to the real backend and the reactive store
pub type AppCatalog = Catalog<HttpApi, CatalogStore>;

/// Build the catalog and provide it to all children
pub fn provide_catalog(config: ApiConfig) -> AppCatalog {
    tracing::info!(base_url = config.base_url(), "using motorcycle API");
    let store = Store::new(CatalogState::default());
    let catalog = Catalog::new(HttpApi::new(config), store);
    provide_context(catalog.clone());
    catalog
}

/// Get the catalog from context
pub fn use_catalog() -> AppCatalog {
    expect_context::<AppCatalog>()
}
