//! Application state for the T&M billing engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::catalog::{Catalog, CatalogLoader};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded rate catalogs.
#[derive(Clone)]
pub struct AppState {
    /// The loaded catalogs.
    catalog: Arc<CatalogLoader>,
}

impl AppState {
    /// Creates a new application state with the given catalog loader.
    pub fn new(catalog: CatalogLoader) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Returns a reference to the loaded catalog.
    pub fn catalog(&self) -> &Catalog {
        self.catalog.catalog()
    }
}
