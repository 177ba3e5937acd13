//! Read-only word listing for one category.

use axum::extract::{Path, State};
use axum::response::Json;
use axum_extra::extract::Query;

use crate::routes::query::ListQuery;
use crate::routes::response::ApiError;
use crate::services::category::WordRow;
use crate::state::AppState;

/// `GET /api/categories/:name/words` — empty for unknown categories.
pub async fn list_words(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<WordRow>>, ApiError> {
    let rows = state.store.list_words(&name, &query.into_params()).await?;
    Ok(Json(rows))
}

#[cfg(test)]
#[path = "words_test.rs"]
mod tests;
