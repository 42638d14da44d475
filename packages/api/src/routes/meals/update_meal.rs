use axum::{
    Json,
    extract::{Path, State},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::entity::meal;
use crate::error::ApiError;
use crate::services::meals::{self, MealInput};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMealRequest {
    pub title: String,
    pub date: NaiveDate,
    pub meal_type: Option<String>,
    pub description: Option<String>,
}

#[tracing::instrument(name = "PUT /meals/{meal_id}", skip(state, req))]
pub async fn update_meal(
    State(state): State<AppState>,
    Path(meal_id): Path<i32>,
    Json(req): Json<UpdateMealRequest>,
) -> Result<Json<meal::Model>, ApiError> {
    let updated = meals::update_meal(
        &state.db,
        meal_id,
        MealInput {
            title: req.title,
            date: req.date,
            meal_type: req.meal_type,
            description: req.description,
        },
    )
    .await?;
    Ok(Json(updated))
}
