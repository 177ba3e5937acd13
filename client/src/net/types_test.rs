use super::*;

// =============================================================
// Category
// =============================================================

#[test]
fn category_new_starts_with_zero_amount() {
    let category = Category::new("Math", "Algebra");
    assert_eq!(category.name, "Math");
    assert_eq!(category.description, "Algebra");
    assert_eq!(category.amount, 0);
}

#[test]
fn category_serializes_expected_fields() {
    let value = serde_json::to_value(Category::new("Math", "Algebra")).unwrap();
    assert_eq!(value, serde_json::json!({ "name": "Math", "description": "Algebra", "amount": 0 }));
}

#[test]
fn category_missing_amount_defaults_to_zero() {
    let category: Category = serde_json::from_str(r#"{"name":"Math","description":"Algebra"}"#).unwrap();
    assert_eq!(category.amount, 0);
}

#[test]
fn category_null_amount_defaults_to_zero() {
    let category: Category =
        serde_json::from_str(r#"{"name":"Math","description":"Algebra","amount":null}"#).unwrap();
    assert_eq!(category.amount, 0);
}

#[test]
fn category_accepts_float_encoded_amount() {
    let category: Category =
        serde_json::from_str(r#"{"name":"Math","description":"Algebra","amount":3.0}"#).unwrap();
    assert_eq!(category.amount, 3);
}

#[test]
fn category_rejects_negative_amount() {
    let result = serde_json::from_str::<Category>(r#"{"name":"Math","description":"","amount":-1}"#);
    assert!(result.is_err());
}

#[test]
fn category_rejects_string_amount() {
    let result = serde_json::from_str::<Category>(r#"{"name":"Math","description":"","amount":"2"}"#);
    assert!(result.is_err());
}

// =============================================================
// ModelAction
// =============================================================

#[test]
fn model_action_constructors_set_action_kind() {
    let post = ModelAction::post(Category::new("a", "b"));
    let delete = ModelAction::delete(Category::new("a", "b"));
    assert_eq!(post.action, Action::Post);
    assert_eq!(delete.action, Action::Delete);
    assert_eq!(post.payload, delete.payload);
}

#[test]
fn action_serializes_uppercase() {
    assert_eq!(serde_json::to_value(Action::Post).unwrap(), serde_json::json!("POST"));
    assert_eq!(serde_json::to_value(Action::Delete).unwrap(), serde_json::json!("DELETE"));
}

// =============================================================
// Word
// =============================================================

#[test]
fn word_deserializes_term_and_definition() {
    let word: Word = serde_json::from_str(r#"{"term":"sum","definition":"result of addition"}"#).unwrap();
    assert_eq!(word, Word { term: "sum".to_owned(), definition: "result of addition".to_owned() });
}
