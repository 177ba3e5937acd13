//! In-process [`CategoryStore`] used when no database is configured.
//!
//! Mirrors the Postgres store: names are unique, deletes cascade to words,
//! `amount` is derived, unknown `order_by` fields are ignored, and ties
//! break on insertion order.

use std::cmp::Ordering;

use tokio::sync::RwLock;
use tracing::info;

use super::category::{CategoryError, CategoryRow, CategoryStore, ListParams, WordRow};

struct StoredCategory {
    id: i64,
    name: String,
    description: String,
}

struct StoredWord {
    id: i64,
    category_id: i64,
    term: String,
    definition: String,
}

#[derive(Default)]
struct Tables {
    next_id: i64,
    categories: Vec<StoredCategory>,
    words: Vec<StoredWord>,
}

impl Tables {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn amount(&self, category_id: i64) -> i64 {
        let count = self.words.iter().filter(|w| w.category_id == category_id).count();
        i64::try_from(count).unwrap_or(i64::MAX)
    }

    fn row(&self, category: &StoredCategory) -> CategoryRow {
        CategoryRow {
            name: category.name.clone(),
            description: category.description.clone(),
            amount: self.amount(category.id),
        }
    }
}

#[derive(Default)]
pub struct MemoryCategoryStore {
    tables: RwLock<Tables>,
}

impl MemoryCategoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a word to an existing category. Words have no HTTP write route.
    #[cfg(test)]
    pub async fn insert_word(&self, category: &str, term: &str, definition: &str) -> Result<(), CategoryError> {
        let mut tables = self.tables.write().await;
        let category_id = tables
            .categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.id)
            .ok_or_else(|| CategoryError::NotFound(category.to_owned()))?;
        if tables.words.iter().any(|w| w.category_id == category_id && w.term == term) {
            return Err(CategoryError::Duplicate(term.to_owned()));
        }
        let id = tables.allocate_id();
        tables.words.push(StoredWord {
            id,
            category_id,
            term: term.to_owned(),
            definition: definition.to_owned(),
        });
        Ok(())
    }
}

fn page<T>(items: Vec<T>, params: &ListParams) -> Vec<T> {
    let skip = usize::try_from(params.skip).unwrap_or(usize::MAX);
    let take = usize::try_from(params.limit).unwrap_or(0);
    items.into_iter().skip(skip).take(take).collect()
}

#[async_trait::async_trait]
impl CategoryStore for MemoryCategoryStore {
    async fn list_categories(&self, params: &ListParams) -> Result<Vec<CategoryRow>, CategoryError> {
        let tables = self.tables.read().await;
        let mut sorted: Vec<&StoredCategory> = tables.categories.iter().collect();
        sorted.sort_by(|a, b| {
            for order in &params.order_by {
                let ordering = match order.field.as_str() {
                    "id" => a.id.cmp(&b.id),
                    "name" => a.name.cmp(&b.name),
                    _ => continue,
                };
                if ordering != Ordering::Equal {
                    return order.direction.apply(ordering);
                }
            }
            a.id.cmp(&b.id)
        });
        let rows = sorted.into_iter().map(|c| tables.row(c)).collect();
        Ok(page(rows, params))
    }

    async fn get_category(&self, name: &str) -> Result<CategoryRow, CategoryError> {
        let tables = self.tables.read().await;
        tables
            .categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| tables.row(c))
            .ok_or_else(|| CategoryError::NotFound(name.to_owned()))
    }

    async fn create_category(&self, name: &str, description: &str) -> Result<CategoryRow, CategoryError> {
        let mut tables = self.tables.write().await;
        if tables.categories.iter().any(|c| c.name == name) {
            return Err(CategoryError::Duplicate(name.to_owned()));
        }
        let id = tables.allocate_id();
        tables.categories.push(StoredCategory { id, name: name.to_owned(), description: description.to_owned() });
        info!(%name, "category inserted");
        Ok(CategoryRow { name: name.to_owned(), description: description.to_owned(), amount: 0 })
    }

    async fn delete_category(&self, name: &str) -> Result<u64, CategoryError> {
        let mut tables = self.tables.write().await;
        let Some(pos) = tables.categories.iter().position(|c| c.name == name) else {
            return Ok(0);
        };
        let removed = tables.categories.remove(pos);
        tables.words.retain(|w| w.category_id != removed.id);
        Ok(1)
    }

    async fn list_words(&self, category: &str, params: &ListParams) -> Result<Vec<WordRow>, CategoryError> {
        let tables = self.tables.read().await;
        let Some(category_id) = tables.categories.iter().find(|c| c.name == category).map(|c| c.id) else {
            return Ok(Vec::new());
        };
        let mut sorted: Vec<&StoredWord> = tables.words.iter().filter(|w| w.category_id == category_id).collect();
        sorted.sort_by(|a, b| {
            for order in &params.order_by {
                let ordering = match order.field.as_str() {
                    "id" => a.id.cmp(&b.id),
                    "term" => a.term.cmp(&b.term),
                    _ => continue,
                };
                if ordering != Ordering::Equal {
                    return order.direction.apply(ordering);
                }
            }
            a.id.cmp(&b.id)
        });
        let rows = sorted
            .into_iter()
            .map(|w| WordRow { term: w.term.clone(), definition: w.definition.clone() })
            .collect();
        Ok(page(rows, params))
    }
}

#[cfg(test)]
#[path = "memory_store_test.rs"]
mod tests;
