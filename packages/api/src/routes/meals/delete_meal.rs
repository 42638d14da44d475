use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::error::ApiError;
use crate::services::meals;
use crate::state::AppState;

#[tracing::instrument(name = "DELETE /meals/{meal_id}", skip(state))]
pub async fn delete_meal(
    State(state): State<AppState>,
    Path(meal_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    meals::delete_meal(&state.db, meal_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
