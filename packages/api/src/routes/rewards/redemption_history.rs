use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::entity::reward_redemption;
use crate::error::ApiError;
use crate::services::rewards;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedemptionHistoryQuery {
    pub user_id: Option<String>,
    pub limit: Option<u64>,
}

#[tracing::instrument(name = "GET /rewards/redemptions", skip(state))]
pub async fn redemption_history(
    State(state): State<AppState>,
    Query(query): Query<RedemptionHistoryQuery>,
) -> Result<Json<Vec<reward_redemption::Model>>, ApiError> {
    super::ensure_points_enabled(&state)?;
    let history = rewards::redemption_history(
        &state.db,
        query.user_id.as_deref(),
        query.limit.unwrap_or(50),
    )
    .await?;
    Ok(Json(history))
}
