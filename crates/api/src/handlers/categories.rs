use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use tasklist_db::models::category::CreateCategory;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::response::Envelope;
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = state.categories.list_categories().await?;

    Ok(Json(Envelope::data(categories)))
}

/// POST /api/categories
///
/// Returns 409 `DUPLICATE_NAME` when the name is already taken.
pub async fn create_category(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    let category = state.categories.create_category(&input).await?;

    Ok(Json(Envelope::data(category)))
}
