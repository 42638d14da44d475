use axum::{Json, extract::State};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::services::meals::{self, RecurringMealInput};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringMealRequest {
    pub title: String,
    /// Defaults to today.
    pub start_date: Option<NaiveDate>,
    /// 1 = Monday … 7 = Sunday.
    pub day_of_week: u32,
    pub weeks: u32,
    pub meal_type: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecurringMealResponse {
    pub created: u32,
}

#[tracing::instrument(name = "POST /meals/recurring", skip(state, req))]
pub async fn create_recurring_meals(
    State(state): State<AppState>,
    Json(req): Json<RecurringMealRequest>,
) -> Result<Json<RecurringMealResponse>, ApiError> {
    let created = meals::create_recurring_meals(
        &state.db,
        state.clock.now(),
        RecurringMealInput {
            title: req.title,
            start_date: req.start_date.unwrap_or_else(|| state.clock.today()),
            day_of_week: req.day_of_week,
            weeks: req.weeks,
            meal_type: req.meal_type,
            description: req.description,
        },
    )
    .await?;
    Ok(Json(RecurringMealResponse { created }))
}
