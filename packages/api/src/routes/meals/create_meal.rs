use axum::{Json, extract::State};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::entity::meal;
use crate::error::ApiError;
use crate::services::meals::{self, MealInput};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMealRequest {
    pub title: String,
    pub date: NaiveDate,
    pub meal_type: Option<String>,
    pub description: Option<String>,
}

#[tracing::instrument(name = "POST /meals", skip(state, req))]
pub async fn create_meal(
    State(state): State<AppState>,
    Json(req): Json<CreateMealRequest>,
) -> Result<Json<meal::Model>, ApiError> {
    let created = meals::create_meal(
        &state.db,
        state.clock.now(),
        MealInput {
            title: req.title,
            date: req.date,
            meal_type: req.meal_type,
            description: req.description,
        },
    )
    .await?;
    Ok(Json(created))
}
