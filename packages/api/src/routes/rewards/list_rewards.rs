use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::entity::reward;
use crate::error::ApiError;
use crate::services::rewards;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRewardsQuery {
    #[serde(default)]
    pub include_inactive: bool,
}

#[tracing::instrument(name = "GET /rewards", skip(state))]
pub async fn list_rewards(
    State(state): State<AppState>,
    Query(query): Query<ListRewardsQuery>,
) -> Result<Json<Vec<reward::Model>>, ApiError> {
    super::ensure_points_enabled(&state)?;
    Ok(Json(
        rewards::list_rewards(&state.db, !query.include_inactive).await?,
    ))
}
