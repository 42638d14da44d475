use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use crate::entity::reward;
use crate::error::ApiError;
use crate::services::rewards::{self, RewardInput};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRewardRequest {
    pub title: String,
    pub cost_points: i64,
    pub emoji: Option<String>,
}

/// Past redemptions keep their copied title and cost; edits only affect
/// the catalog going forward.
#[tracing::instrument(name = "PUT /rewards/{reward_id}", skip(state, req))]
pub async fn update_reward(
    State(state): State<AppState>,
    Path(reward_id): Path<i32>,
    Json(req): Json<UpdateRewardRequest>,
) -> Result<Json<reward::Model>, ApiError> {
    super::ensure_points_enabled(&state)?;
    let updated = rewards::update_reward(
        &state.db,
        reward_id,
        RewardInput {
            title: req.title,
            cost_points: req.cost_points,
            emoji: req.emoji,
        },
    )
    .await?;
    Ok(Json(updated))
}
