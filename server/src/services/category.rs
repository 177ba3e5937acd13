//! Category service — domain types and the storage seam.
//!
//! DESIGN
//! ======
//! Handlers depend on the [`CategoryStore`] trait, injected through
//! `AppState`. `pg_store` persists to Postgres; `memory_store` keeps the same
//! semantics in process for local runs and tests.
//!
//! A category's `amount` is never stored: both stores derive it as the
//! number of words that belong to the category.

use serde::Serialize;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("category not found: {0}")]
    NotFound(String),
    #[error("category already exists: {0}")]
    Duplicate(String),
    #[error("invalid category: {0}")]
    Invalid(&'static str),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Category as returned from store queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRow {
    pub name: String,
    pub description: String,
    pub amount: i64,
}

/// Word as returned from store queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordRow {
    pub term: String,
    pub definition: String,
}

/// Sort direction of one `order_by` clause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    #[must_use]
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// Flip `ordering` for descending sorts.
    #[must_use]
    pub fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub direction: Direction,
}

/// Paging and ordering for list queries. Fields outside a store's
/// allow-list are ignored; ties always break on insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub limit: i64,
    pub skip: i64,
    pub order_by: Vec<OrderBy>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self { limit: 50, skip: 0, order_by: Vec::new() }
    }
}

/// SQL column for a category `order_by` field.
#[must_use]
pub fn category_order_column(field: &str) -> Option<&'static str> {
    match field {
        "id" => Some("c.id"),
        "name" => Some("c.name"),
        _ => None,
    }
}

/// SQL column for a word `order_by` field.
#[must_use]
pub fn word_order_column(field: &str) -> Option<&'static str> {
    match field {
        "id" => Some("w.id"),
        "term" => Some("w.term"),
        _ => None,
    }
}

/// Reject names that cannot serve as a route key.
///
/// # Errors
///
/// Returns [`CategoryError::Invalid`] for blank names.
pub fn validate_new_category(name: &str) -> Result<(), CategoryError> {
    if name.trim().is_empty() {
        return Err(CategoryError::Invalid("category name is required"));
    }
    Ok(())
}

// =============================================================================
// STORE
// =============================================================================

/// Persistence operations behind the `/api/categories` routes.
#[async_trait::async_trait]
pub trait CategoryStore: Send + Sync {
    /// List categories with derived word counts.
    async fn list_categories(&self, params: &ListParams) -> Result<Vec<CategoryRow>, CategoryError>;

    /// Fetch one category by its unique name.
    async fn get_category(&self, name: &str) -> Result<CategoryRow, CategoryError>;

    /// Insert a category; a taken name is [`CategoryError::Duplicate`].
    async fn create_category(&self, name: &str, description: &str) -> Result<CategoryRow, CategoryError>;

    /// Delete by name (and the category's words). Returns deleted rows.
    async fn delete_category(&self, name: &str) -> Result<u64, CategoryError>;

    /// List the words of the named category; empty for unknown names.
    async fn list_words(&self, category: &str, params: &ListParams) -> Result<Vec<WordRow>, CategoryError>;
}

#[cfg(test)]
#[path = "category_test.rs"]
mod tests;
