use axum::{
    Json,
    extract::{Query, State},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::ApiError;
use crate::services::chores::{self, ChoreRow};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AvailableChoresQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Pending occurrences of unassigned chores, open for claiming.
#[tracing::instrument(name = "GET /chores/available", skip(state))]
pub async fn available_chores(
    State(state): State<AppState>,
    Query(query): Query<AvailableChoresQuery>,
) -> Result<Json<Vec<ChoreRow>>, ApiError> {
    let rows = chores::available_chores(&state.db, query.start, query.end).await?;
    Ok(Json(rows))
}
