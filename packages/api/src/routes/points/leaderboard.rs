use axum::{Json, extract::State};

use crate::error::ApiError;
use crate::services::points::{self, LeaderboardRow};
use crate::state::AppState;

#[tracing::instrument(name = "GET /points/leaderboard", skip(state))]
pub async fn leaderboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaderboardRow>>, ApiError> {
    Ok(Json(points::leaderboard(&state.db).await?))
}
