use axum::{
    Json,
    extract::{Path, State},
};

use crate::error::ApiError;
use crate::services::chores::{self, ChoreRow};
use crate::state::AppState;

/// Resolve a pending occurrence as ignored. No points are awarded.
#[tracing::instrument(name = "POST /chores/{occurrence_id}/ignore", skip(state))]
pub async fn ignore_chore(
    State(state): State<AppState>,
    Path(occurrence_id): Path<i32>,
) -> Result<Json<ChoreRow>, ApiError> {
    let row = chores::ignore_occurrence(&state.db, state.clock.now(), occurrence_id).await?;
    Ok(Json(row))
}
