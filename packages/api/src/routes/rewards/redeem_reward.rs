use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::services::rewards::{self, RedemptionOutcome};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemRequest {
    pub user_id: String,
}

/// Check the balance, debit the cost and record the redemption, all in one
/// transaction. Fails with a conflict when the balance is insufficient.
#[tracing::instrument(name = "POST /rewards/{reward_id}/redeem", skip(state))]
pub async fn redeem_reward(
    State(state): State<AppState>,
    Path(reward_id): Path<i32>,
    Json(req): Json<RedeemRequest>,
) -> Result<Json<RedemptionOutcome>, ApiError> {
    super::ensure_points_enabled(&state)?;
    let outcome = rewards::redeem(&state.db, state.clock.now(), &req.user_id, reward_id).await?;
    Ok(Json(outcome))
}
