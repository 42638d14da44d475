use axum::{
    Json,
    extract::{Path, State},
};

use crate::entity::chore_definition;
use crate::error::ApiError;
use crate::services::chores;
use crate::state::AppState;

#[tracing::instrument(name = "GET /chores/definitions", skip(state))]
pub async fn list_definitions(
    State(state): State<AppState>,
) -> Result<Json<Vec<chore_definition::Model>>, ApiError> {
    Ok(Json(chores::list_definitions(&state.db).await?))
}

#[tracing::instrument(name = "GET /chores/definitions/{definition_id}", skip(state))]
pub async fn get_definition(
    State(state): State<AppState>,
    Path(definition_id): Path<String>,
) -> Result<Json<chore_definition::Model>, ApiError> {
    Ok(Json(chores::get_definition(&state.db, &definition_id).await?))
}

#[tracing::instrument(name = "GET /chores/definitions/user/{user_id}", skip(state))]
pub async fn definitions_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<chore_definition::Model>>, ApiError> {
    Ok(Json(
        chores::definitions_for_user(&state.db, &user_id).await?,
    ))
}

/// Definitions available to anyone (no assignee).
#[tracing::instrument(name = "GET /chores/definitions/adhoc", skip(state))]
pub async fn adhoc_definitions(
    State(state): State<AppState>,
) -> Result<Json<Vec<chore_definition::Model>>, ApiError> {
    Ok(Json(chores::unassigned_definitions(&state.db).await?))
}
