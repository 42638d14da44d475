use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::error::ApiError;
use crate::services::points;
use crate::state::AppState;

#[derive(Serialize)]
pub struct BalanceResponse {
    pub user_id: String,
    pub balance: i64,
}

/// Derived balance, recomputed from the ledger on every call.
#[tracing::instrument(name = "GET /points/{user_id}/balance", skip(state))]
pub async fn get_balance(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<BalanceResponse>, ApiError> {
    points::get_user(&state.db, &user_id).await?;
    let balance = points::balance(&state.db, &user_id).await?;
    Ok(Json(BalanceResponse { user_id, balance }))
}
