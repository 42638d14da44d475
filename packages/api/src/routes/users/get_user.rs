use axum::{
    Json,
    extract::{Path, State},
};

use crate::entity::user;
use crate::error::ApiError;
use crate::services::points;
use crate::state::AppState;

#[tracing::instrument(name = "GET /users/{user_id}", skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<user::Model>, ApiError> {
    Ok(Json(points::get_user(&state.db, &user_id).await?))
}
