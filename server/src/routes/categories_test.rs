use axum::body::Body;
use axum::extract::FromRequest;
use axum::http::Request;

use super::*;
use crate::state::test_helpers::{seeded_app_state, test_app_state};

fn body(name: &str, description: &str) -> Result<Json<CreateCategoryBody>, JsonRejection> {
    Ok(Json(CreateCategoryBody { name: name.to_owned(), description: description.to_owned() }))
}

async fn raw_body(json: &str) -> Result<Json<CreateCategoryBody>, JsonRejection> {
    let request = Request::builder()
        .method("POST")
        .uri("/api/categories")
        .header("content-type", "application/json")
        .body(Body::from(json.to_owned()))
        .unwrap();
    Json::<CreateCategoryBody>::from_request(request, &()).await
}

#[tokio::test]
async fn create_returns_201_with_zero_amount() {
    let (state, _) = test_app_state();
    let (status, Json(row)) = create_category(State(state), body("Math", "Algebra")).await.unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(row, CategoryRow { name: "Math".into(), description: "Algebra".into(), amount: 0 });
}

#[tokio::test]
async fn create_ignores_client_amount() {
    let (state, _) = test_app_state();
    let parsed = raw_body(r#"{"name":"Math","description":"Algebra","amount":7}"#).await;
    let (_, Json(row)) = create_category(State(state), parsed).await.unwrap();
    assert_eq!(row.amount, 0);
}

#[tokio::test]
async fn create_duplicate_is_400() {
    let (state, _) = seeded_app_state(&[("Math", "Algebra")]).await;
    let err = create_category(State(state), body("Math", "again")).await.unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert_eq!(err.message, crate::routes::response::DUPLICATE_MESSAGE);
}

#[tokio::test]
async fn create_blank_name_is_400() {
    let (state, _) = test_app_state();
    let err = create_category(State(state), body("  ", "x")).await.unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_malformed_json_is_400() {
    let (state, _) = test_app_state();
    let parsed = raw_body("{not json").await;
    let err = create_category(State(state), parsed).await.unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_reports_word_counts() {
    let (state, store) = seeded_app_state(&[("Math", "Algebra"), ("Bio", "Cells")]).await;
    store.insert_word("Bio", "cell", "unit of life").await.unwrap();

    let Json(rows) = list_categories(State(state), Query(ListQuery::default())).await.unwrap();
    let amounts: Vec<(&str, i64)> = rows.iter().map(|r| (r.name.as_str(), r.amount)).collect();
    assert_eq!(amounts, vec![("Math", 0), ("Bio", 1)]);
}

#[tokio::test]
async fn list_honors_query_params() {
    let (state, _) = seeded_app_state(&[("Math", ""), ("Bio", ""), ("Chem", "")]).await;
    let query = ListQuery { limit: Some("2".into()), skip: None, order_by: vec!["name asc".into()] };
    let Json(rows) = list_categories(State(state), Query(query)).await.unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Bio", "Chem"]);
}

#[tokio::test]
async fn get_unknown_is_404() {
    let (state, _) = test_app_state();
    let err = get_category(State(state), Path("Geo".into())).await.unwrap_err();
    assert_eq!(err.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_known_returns_row() {
    let (state, _) = seeded_app_state(&[("Math", "Algebra")]).await;
    let Json(row) = get_category(State(state), Path("Math".into())).await.unwrap();
    assert_eq!(row.description, "Algebra");
}

#[tokio::test]
async fn delete_reports_row_count() {
    let (state, _) = seeded_app_state(&[("Math", "Algebra")]).await;

    let Json(first) = delete_category(State(state.clone()), Path("Math".into())).await.unwrap();
    assert_eq!(first, WrapperResponse { code: 200, message: "category rows deleted 1".into() });

    let Json(second) = delete_category(State(state.clone()), Path("Math".into())).await.unwrap();
    assert_eq!(second.message, "category rows deleted 0");

    let Json(rows) = list_categories(State(state), Query(ListQuery::default())).await.unwrap();
    assert!(rows.is_empty());
}
