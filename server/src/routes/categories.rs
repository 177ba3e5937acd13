//! Category REST routes.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum_extra::extract::Query;
use serde::Deserialize;
use tracing::info;

use crate::routes::query::ListQuery;
use crate::routes::response::{ApiError, WrapperResponse};
use crate::services::category::{CategoryRow, validate_new_category};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCategoryBody {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// `GET /api/categories` — list categories with word counts.
pub async fn list_categories(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<CategoryRow>>, ApiError> {
    let rows = state.store.list_categories(&query.into_params()).await?;
    Ok(Json(rows))
}

/// `GET /api/categories/:name`
pub async fn get_category(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CategoryRow>, ApiError> {
    Ok(Json(state.store.get_category(&name).await?))
}

/// `POST /api/categories` — create a category with no words.
pub async fn create_category(
    State(state): State<AppState>,
    body: Result<Json<CreateCategoryBody>, JsonRejection>,
) -> Result<(StatusCode, Json<CategoryRow>), ApiError> {
    let Json(body) = body.map_err(|e| ApiError::bad_request(e.body_text()))?;
    validate_new_category(&body.name)?;

    let row = state.store.create_category(&body.name, &body.description).await?;
    info!(name = %row.name, "category created");
    Ok((StatusCode::CREATED, Json(row)))
}

/// `DELETE /api/categories/:name` — delete a category and its words.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<WrapperResponse>, ApiError> {
    let deleted = state.store.delete_category(&name).await?;
    info!(%name, deleted, "category delete");
    Ok(Json(WrapperResponse::new(StatusCode::OK, format!("category rows deleted {deleted}"))))
}

#[cfg(test)]
#[path = "categories_test.rs"]
mod tests;
