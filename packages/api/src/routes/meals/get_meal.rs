use axum::{
    Json,
    extract::{Path, State},
};

use crate::entity::meal;
use crate::error::ApiError;
use crate::services::meals;
use crate::state::AppState;

#[tracing::instrument(name = "GET /meals/{meal_id}", skip(state))]
pub async fn get_meal(
    State(state): State<AppState>,
    Path(meal_id): Path<i32>,
) -> Result<Json<meal::Model>, ApiError> {
    Ok(Json(meals::get_meal(&state.db, meal_id).await?))
}
