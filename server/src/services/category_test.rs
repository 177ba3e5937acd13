use std::cmp::Ordering;

use super::*;

#[test]
fn list_params_default_matches_query_defaults() {
    let params = ListParams::default();
    assert_eq!(params.limit, 50);
    assert_eq!(params.skip, 0);
    assert!(params.order_by.is_empty());
}

#[test]
fn direction_sql_keywords() {
    assert_eq!(Direction::Asc.as_sql(), "ASC");
    assert_eq!(Direction::Desc.as_sql(), "DESC");
}

#[test]
fn direction_apply_reverses_for_desc() {
    assert_eq!(Direction::Asc.apply(Ordering::Less), Ordering::Less);
    assert_eq!(Direction::Desc.apply(Ordering::Less), Ordering::Greater);
    assert_eq!(Direction::Desc.apply(Ordering::Equal), Ordering::Equal);
}

#[test]
fn category_order_column_allows_id_and_name_only() {
    assert_eq!(category_order_column("id"), Some("c.id"));
    assert_eq!(category_order_column("name"), Some("c.name"));
    assert_eq!(category_order_column("description"), None);
    assert_eq!(category_order_column("name; DROP TABLE categories"), None);
}

#[test]
fn word_order_column_allows_id_and_term_only() {
    assert_eq!(word_order_column("id"), Some("w.id"));
    assert_eq!(word_order_column("term"), Some("w.term"));
    assert_eq!(word_order_column("definition"), None);
}

#[test]
fn validate_new_category_rejects_blank_name() {
    assert!(matches!(validate_new_category(""), Err(CategoryError::Invalid(_))));
    assert!(matches!(validate_new_category("   "), Err(CategoryError::Invalid(_))));
    assert!(validate_new_category("Math").is_ok());
}

#[test]
fn category_row_serializes_wire_fields() {
    let row = CategoryRow { name: "Math".into(), description: "Algebra".into(), amount: 2 };
    assert_eq!(
        serde_json::to_value(&row).unwrap(),
        serde_json::json!({ "name": "Math", "description": "Algebra", "amount": 2 })
    );
}

#[test]
fn word_row_serializes_wire_fields() {
    let row = WordRow { term: "sum".into(), definition: "result of addition".into() };
    assert_eq!(
        serde_json::to_value(&row).unwrap(),
        serde_json::json!({ "term": "sum", "definition": "result of addition" })
    );
}
