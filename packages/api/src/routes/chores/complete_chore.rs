use axum::{
    Json,
    extract::{Path, State},
};

use crate::error::ApiError;
use crate::services::chores::{self, ChoreRow};
use crate::state::AppState;

/// Resolve a pending occurrence as completed and credit the assignee.
#[tracing::instrument(name = "POST /chores/{occurrence_id}/complete", skip(state))]
pub async fn complete_chore(
    State(state): State<AppState>,
    Path(occurrence_id): Path<i32>,
) -> Result<Json<ChoreRow>, ApiError> {
    let row = chores::complete_occurrence(
        &state.db,
        &state.features,
        state.clock.now(),
        occurrence_id,
    )
    .await?;
    Ok(Json(row))
}
