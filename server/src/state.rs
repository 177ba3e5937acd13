//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the category store behind a trait object so routes run the same
//! against Postgres and the in-process store.

use std::sync::Arc;

use crate::services::category::CategoryStore;

/// Clone is required by Axum; the store is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CategoryStore>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn CategoryStore>) -> Self {
        Self { store }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::services::memory_store::MemoryCategoryStore;

    /// `AppState` over an empty in-process store. The concrete store is
    /// returned too so tests can seed words.
    #[must_use]
    pub fn test_app_state() -> (AppState, Arc<MemoryCategoryStore>) {
        let store = Arc::new(MemoryCategoryStore::new());
        (AppState::new(store.clone()), store)
    }

    /// Store seeded with `(name, description)` categories, in order.
    pub async fn seeded_app_state(categories: &[(&str, &str)]) -> (AppState, Arc<MemoryCategoryStore>) {
        let (state, store) = test_app_state();
        for (name, description) in categories {
            store
                .create_category(name, description)
                .await
                .expect("seed category should insert");
        }
        (state, store)
    }
}
