use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::error::ApiError;
use crate::services::chores;
use crate::state::AppState;

/// Delete a definition and all of its occurrences, regardless of status.
#[tracing::instrument(name = "DELETE /chores/definitions/{definition_id}", skip(state))]
pub async fn delete_definition(
    State(state): State<AppState>,
    Path(definition_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    chores::delete_definition(&state.db, &definition_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
