use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::services::chores::{self, ChoreRow};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimChoreRequest {
    pub user_id: String,
}

/// Claim a single occurrence of an unassigned chore for a user.
#[tracing::instrument(name = "POST /chores/{occurrence_id}/claim", skip(state))]
pub async fn claim_chore(
    State(state): State<AppState>,
    Path(occurrence_id): Path<i32>,
    Json(req): Json<ClaimChoreRequest>,
) -> Result<Json<ChoreRow>, ApiError> {
    let row = chores::claim_occurrence(&state.db, occurrence_id, &req.user_id).await?;
    Ok(Json(row))
}
