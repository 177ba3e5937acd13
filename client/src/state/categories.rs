//! Category list state and the pending-action reconciliation it drives.
//!
//! DESIGN
//! ======
//! A page holds at most one pending [`ModelAction`] in its own signal.
//! Applying it means: clear it, run the matching remote call, then re-fetch
//! the whole list. The list is only ever replaced wholesale by a successful
//! fetch.
//!
//! ERROR HANDLING
//! ==============
//! Mutation and fetch failures are logged and otherwise ignored; a failed
//! fetch leaves the previously fetched items in place.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use crate::net::api::CategoryService;
use crate::net::types::{Action, Category, ModelAction};

/// Category list owned by the categories page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoriesState {
    pub items: Vec<Category>,
}

impl CategoriesState {
    /// Apply the outcome of [`sync_categories`]; `None` keeps the current items.
    pub fn finish_sync(&mut self, fetched: Option<Vec<Category>>) {
        if let Some(items) = fetched {
            self.items = items;
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|c| c.name == name)
    }
}

/// Run the remote call matching `action`.
///
/// # Errors
///
/// Returns the service error unchanged.
pub async fn apply_action<S: CategoryService>(service: &S, action: &ModelAction<Category>) -> Result<(), String> {
    match action.action {
        Action::Post => service.create(&action.payload).await.map(|_| ()),
        Action::Delete => service.remove(&action.payload.name).await,
    }
}

/// Apply `pending` (if any) and re-fetch the category collection.
///
/// Returns the fresh list, or `None` when the fetch failed.
pub async fn sync_categories<S: CategoryService>(
    service: &S,
    pending: Option<ModelAction<Category>>,
) -> Option<Vec<Category>> {
    if let Some(action) = pending {
        if let Err(e) = apply_action(service, &action).await {
            leptos::logging::warn!("category {:?} '{}' failed: {e}", action.action, action.payload.name);
        }
    }

    match service.list().await {
        Ok(items) => Some(items),
        Err(e) => {
            leptos::logging::warn!("category fetch failed: {e}");
            None
        }
    }
}
