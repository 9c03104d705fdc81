use std::sync::Arc;

use crate::datalayer::listings::store::ListingStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Listing store client; injected so tests can swap in a double
    pub store: Arc<dyn ListingStore>,
}

impl AppState {
    /// Create new application state around a store client
    pub fn new(store: Arc<dyn ListingStore>) -> Self {
        Self { store }
    }
}
