use axum::{Json, extract::State};
use serde::Deserialize;

use crate::entity::reward;
use crate::error::ApiError;
use crate::services::rewards::{self, RewardInput};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRewardRequest {
    pub title: String,
    pub cost_points: i64,
    pub emoji: Option<String>,
}

#[tracing::instrument(name = "POST /rewards", skip(state, req))]
pub async fn create_reward(
    State(state): State<AppState>,
    Json(req): Json<CreateRewardRequest>,
) -> Result<Json<reward::Model>, ApiError> {
    super::ensure_points_enabled(&state)?;
    let created = rewards::create_reward(
        &state.db,
        RewardInput {
            title: req.title,
            cost_points: req.cost_points,
            emoji: req.emoji,
        },
    )
    .await?;
    Ok(Json(created))
}
