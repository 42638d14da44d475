use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use crate::entity::user;
use crate::error::ApiError;
use crate::services::points::{self, NewUser};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: String,
    pub color: Option<String>,
    pub avatar: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_parent: bool,
}

/// Display fields only; ledger history is keyed by the surrogate id and is
/// unaffected by a rename.
#[tracing::instrument(name = "PUT /users/{user_id}", skip(state, req))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<user::Model>, ApiError> {
    let updated = points::update_user(
        &state.db,
        &user_id,
        NewUser {
            name: req.name,
            color: req.color,
            avatar: req.avatar,
            image_url: req.image_url,
            is_parent: req.is_parent,
        },
    )
    .await?;
    Ok(Json(updated))
}
