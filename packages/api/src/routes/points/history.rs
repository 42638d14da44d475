use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::entity::points_ledger_entry;
use crate::error::ApiError;
use crate::services::points;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<u64>,
}

#[tracing::instrument(name = "GET /points/{user_id}/history", skip(state))]
pub async fn get_history(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<points_ledger_entry::Model>>, ApiError> {
    points::get_user(&state.db, &user_id).await?;
    let entries = points::history(&state.db, &user_id, query.limit.unwrap_or(50)).await?;
    Ok(Json(entries))
}
