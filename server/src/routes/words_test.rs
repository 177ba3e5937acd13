use super::*;
use crate::state::test_helpers::{seeded_app_state, test_app_state};

#[tokio::test]
async fn unknown_category_lists_no_words() {
    let (state, _) = test_app_state();
    let Json(rows) = list_words(State(state), Path("Geo".into()), Query(ListQuery::default())).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn lists_only_the_named_category() {
    let (state, store) = seeded_app_state(&[("Math", ""), ("Bio", "")]).await;
    store.insert_word("Math", "sum", "result of addition").await.unwrap();
    store.insert_word("Bio", "cell", "unit of life").await.unwrap();

    let Json(rows) = list_words(State(state), Path("Math".into()), Query(ListQuery::default())).await.unwrap();
    assert_eq!(rows, vec![WordRow { term: "sum".into(), definition: "result of addition".into() }]);
}

#[tokio::test]
async fn orders_by_term_desc() {
    let (state, store) = seeded_app_state(&[("Math", "")]).await;
    store.insert_word("Math", "average", "a").await.unwrap();
    store.insert_word("Math", "sum", "b").await.unwrap();

    let query = ListQuery { order_by: vec!["term desc".into()], ..ListQuery::default() };
    let Json(rows) = list_words(State(state), Path("Math".into()), Query(query)).await.unwrap();
    let terms: Vec<&str> = rows.iter().map(|w| w.term.as_str()).collect();
    assert_eq!(terms, vec!["sum", "average"]);
}
