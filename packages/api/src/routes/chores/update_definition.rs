use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use crate::entity::chore_definition;
use crate::entity::sea_orm_active_enums::Recurrence;
use crate::error::ApiError;
use crate::services::chores::{self, DefinitionUpdate};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChoreRequest {
    pub title: String,
    pub assigned_to: Option<String>,
    pub recurrence: Recurrence,
    pub points: Option<i64>,
}

/// Edit a definition. Future pending occurrences are replaced with a fresh
/// window; resolved and past occurrences stay as they were.
#[tracing::instrument(name = "PUT /chores/definitions/{definition_id}", skip(state, req))]
pub async fn update_definition(
    State(state): State<AppState>,
    Path(definition_id): Path<String>,
    Json(req): Json<UpdateChoreRequest>,
) -> Result<Json<chore_definition::Model>, ApiError> {
    let definition = chores::update_definition(
        &state.db,
        state.clock.today(),
        &definition_id,
        DefinitionUpdate {
            title: req.title,
            assigned_to: req.assigned_to,
            recurrence: req.recurrence,
            points: req.points.unwrap_or(state.features.points_default),
        },
    )
    .await?;
    Ok(Json(definition))
}
