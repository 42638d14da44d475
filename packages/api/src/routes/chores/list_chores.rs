use axum::{
    Json,
    extract::{Query, State},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::ApiError;
use crate::services::chores::{self, ChoreFilter, ChoreRow};
use crate::state::AppState;

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListChoresQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    #[serde(default = "default_true")]
    pub include_completed: bool,
    pub limit: Option<u64>,
}

#[tracing::instrument(name = "GET /chores", skip(state))]
pub async fn list_chores(
    State(state): State<AppState>,
    Query(query): Query<ListChoresQuery>,
) -> Result<Json<Vec<ChoreRow>>, ApiError> {
    let rows = chores::fetch_chores(
        &state.db,
        ChoreFilter {
            start: query.start,
            end: query.end,
            include_completed: query.include_completed,
            limit: query.limit,
        },
    )
    .await?;
    Ok(Json(rows))
}
