use axum::{Json, extract::State};
use serde::Deserialize;

use crate::entity::chore_definition;
use crate::entity::sea_orm_active_enums::Recurrence;
use crate::error::ApiError;
use crate::services::chores::{self, NewDefinition};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChoreRequest {
    pub title: String,
    pub assigned_to: Option<String>,
    pub recurrence: Recurrence,
    /// Defaults to the configured point value when omitted.
    pub points: Option<i64>,
}

#[tracing::instrument(name = "POST /chores/definitions", skip(state, req))]
pub async fn create_definition(
    State(state): State<AppState>,
    Json(req): Json<CreateChoreRequest>,
) -> Result<Json<chore_definition::Model>, ApiError> {
    let definition = chores::create_definition(
        &state.db,
        state.clock.today(),
        NewDefinition {
            title: req.title,
            assigned_to: req.assigned_to,
            recurrence: req.recurrence,
            points: req.points.unwrap_or(state.features.points_default),
        },
    )
    .await?;
    Ok(Json(definition))
}
