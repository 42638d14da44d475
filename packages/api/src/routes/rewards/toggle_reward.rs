use axum::{
    Json,
    extract::{Path, State},
};

use crate::entity::reward;
use crate::error::ApiError;
use crate::services::rewards;
use crate::state::AppState;

/// Flip the visibility flag.
#[tracing::instrument(name = "POST /rewards/{reward_id}/toggle", skip(state))]
pub async fn toggle_reward(
    State(state): State<AppState>,
    Path(reward_id): Path<i32>,
) -> Result<Json<reward::Model>, ApiError> {
    super::ensure_points_enabled(&state)?;
    let existing = rewards::get_reward(&state.db, reward_id).await?;
    let updated = rewards::set_reward_active(&state.db, reward_id, !existing.active).await?;
    Ok(Json(updated))
}

/// Soft delete: rewards referenced by redemption history are only ever
/// hidden, never removed.
#[tracing::instrument(name = "DELETE /rewards/{reward_id}", skip(state))]
pub async fn deactivate_reward(
    State(state): State<AppState>,
    Path(reward_id): Path<i32>,
) -> Result<Json<reward::Model>, ApiError> {
    super::ensure_points_enabled(&state)?;
    let updated = rewards::set_reward_active(&state.db, reward_id, false).await?;
    Ok(Json(updated))
}
