use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::error::ApiError;
use crate::services::points;
use crate::state::AppState;

#[tracing::instrument(name = "DELETE /users/{user_id}", skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    points::delete_user(&state.db, &user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
