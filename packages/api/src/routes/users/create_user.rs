use axum::{Json, extract::State};
use serde::Deserialize;

use crate::entity::user;
use crate::error::ApiError;
use crate::services::points::{self, NewUser};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub color: Option<String>,
    pub avatar: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_parent: bool,
}

#[tracing::instrument(name = "POST /users", skip(state, req))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<user::Model>, ApiError> {
    let created = points::create_user(
        &state.db,
        NewUser {
            name: req.name,
            color: req.color,
            avatar: req.avatar,
            image_url: req.image_url,
            is_parent: req.is_parent,
        },
    )
    .await?;
    Ok(Json(created))
}
