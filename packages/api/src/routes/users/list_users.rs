use axum::{Json, extract::State};

use crate::entity::user;
use crate::error::ApiError;
use crate::services::points;
use crate::state::AppState;

#[tracing::instrument(name = "GET /users", skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<user::Model>>, ApiError> {
    Ok(Json(points::list_users(&state.db).await?))
}
