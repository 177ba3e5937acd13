use super::*;
use crate::services::category::{Direction, OrderBy};

fn order(field: &str, direction: Direction) -> OrderBy {
    OrderBy { field: field.to_owned(), direction }
}

async fn seeded() -> MemoryCategoryStore {
    let store = MemoryCategoryStore::new();
    store.create_category("Math", "Algebra").await.unwrap();
    store.create_category("Bio", "Cells").await.unwrap();
    store.create_category("Chem", "Atoms").await.unwrap();
    store
}

fn names(rows: &[CategoryRow]) -> Vec<&str> {
    rows.iter().map(|r| r.name.as_str()).collect()
}

#[tokio::test]
async fn list_defaults_to_insertion_order() {
    let store = seeded().await;
    let rows = store.list_categories(&ListParams::default()).await.unwrap();
    assert_eq!(names(&rows), vec!["Math", "Bio", "Chem"]);
}

#[tokio::test]
async fn list_orders_by_name_desc() {
    let store = seeded().await;
    let params = ListParams { order_by: vec![order("name", Direction::Desc)], ..ListParams::default() };
    let rows = store.list_categories(&params).await.unwrap();
    assert_eq!(names(&rows), vec!["Math", "Chem", "Bio"]);
}

#[tokio::test]
async fn list_ignores_unknown_order_fields() {
    let store = seeded().await;
    let params = ListParams { order_by: vec![order("description", Direction::Asc)], ..ListParams::default() };
    let rows = store.list_categories(&params).await.unwrap();
    assert_eq!(names(&rows), vec!["Math", "Bio", "Chem"]);
}

#[tokio::test]
async fn list_applies_skip_and_limit() {
    let store = seeded().await;
    let params = ListParams { limit: 1, skip: 1, order_by: Vec::new() };
    let rows = store.list_categories(&params).await.unwrap();
    assert_eq!(names(&rows), vec!["Bio"]);

    let past_end = ListParams { limit: 10, skip: 10, order_by: Vec::new() };
    assert!(store.list_categories(&past_end).await.unwrap().is_empty());
}

#[tokio::test]
async fn create_rejects_duplicate_name() {
    let store = seeded().await;
    let err = store.create_category("Math", "again").await.unwrap_err();
    assert!(matches!(err, CategoryError::Duplicate(name) if name == "Math"));
}

#[tokio::test]
async fn amount_counts_words() {
    let store = seeded().await;
    store.insert_word("Math", "sum", "result of addition").await.unwrap();
    store.insert_word("Math", "product", "result of multiplication").await.unwrap();

    assert_eq!(store.get_category("Math").await.unwrap().amount, 2);
    assert_eq!(store.get_category("Bio").await.unwrap().amount, 0);
}

#[tokio::test]
async fn get_missing_is_not_found() {
    let store = seeded().await;
    assert!(matches!(store.get_category("Geo").await, Err(CategoryError::NotFound(_))));
}

#[tokio::test]
async fn delete_cascades_to_words() {
    let store = seeded().await;
    store.insert_word("Math", "sum", "result of addition").await.unwrap();

    assert_eq!(store.delete_category("Math").await.unwrap(), 1);
    assert!(store.list_words("Math", &ListParams::default()).await.unwrap().is_empty());

    // Recreating the name starts with no words.
    store.create_category("Math", "fresh").await.unwrap();
    assert_eq!(store.get_category("Math").await.unwrap().amount, 0);
}

#[tokio::test]
async fn delete_missing_reports_zero_rows() {
    let store = seeded().await;
    assert_eq!(store.delete_category("Geo").await.unwrap(), 0);
}

#[tokio::test]
async fn list_words_unknown_category_is_empty() {
    let store = seeded().await;
    assert!(store.list_words("Geo", &ListParams::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn list_words_orders_by_term() {
    let store = seeded().await;
    store.insert_word("Math", "sum", "a").await.unwrap();
    store.insert_word("Math", "average", "b").await.unwrap();
    store.insert_word("Bio", "cell", "c").await.unwrap();

    let params = ListParams { order_by: vec![order("term", Direction::Asc)], ..ListParams::default() };
    let words = store.list_words("Math", &params).await.unwrap();
    let terms: Vec<&str> = words.iter().map(|w| w.term.as_str()).collect();
    assert_eq!(terms, vec!["average", "sum"]);
}

#[tokio::test]
async fn insert_word_rejects_duplicate_term_in_category() {
    let store = seeded().await;
    store.insert_word("Math", "sum", "a").await.unwrap();
    assert!(matches!(store.insert_word("Math", "sum", "b").await, Err(CategoryError::Duplicate(_))));
    store.insert_word("Bio", "sum", "b").await.unwrap();
}
