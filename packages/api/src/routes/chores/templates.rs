use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::entity::chore_template;
use crate::error::ApiError;
use crate::services::chores;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTemplatesQuery {
    #[serde(default)]
    pub include_inactive: bool,
}

#[tracing::instrument(name = "GET /chores/templates", skip(state))]
pub async fn list_templates(
    State(state): State<AppState>,
    Query(query): Query<ListTemplatesQuery>,
) -> Result<Json<Vec<chore_template::Model>>, ApiError> {
    Ok(Json(
        chores::list_templates(&state.db, !query.include_inactive).await?,
    ))
}

#[tracing::instrument(name = "GET /chores/categories", skip(state))]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(chores::template_categories(&state.db).await?))
}

#[derive(Debug, Deserialize)]
pub struct CreateTemplateRequest {
    pub name: String,
    pub category: String,
}

#[tracing::instrument(name = "POST /chores/templates", skip(state, req))]
pub async fn create_template(
    State(state): State<AppState>,
    Json(req): Json<CreateTemplateRequest>,
) -> Result<Json<chore_template::Model>, ApiError> {
    Ok(Json(
        chores::create_template(&state.db, &req.name, &req.category).await?,
    ))
}
