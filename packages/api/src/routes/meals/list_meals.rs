use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{Days, NaiveDate};
use serde::Deserialize;

use crate::entity::meal;
use crate::error::ApiError;
use crate::services::meals;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMealsQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Defaults to the week starting today when no range is given.
#[tracing::instrument(name = "GET /meals", skip(state))]
pub async fn list_meals(
    State(state): State<AppState>,
    Query(query): Query<ListMealsQuery>,
) -> Result<Json<Vec<meal::Model>>, ApiError> {
    let today = state.clock.today();
    let start = query.start.unwrap_or(today);
    let end = match query.end {
        Some(end) => end,
        None => start
            .checked_add_days(Days::new(6))
            .ok_or_else(|| ApiError::bad_request("Date out of range"))?,
    };
    if end < start {
        return Err(ApiError::bad_request("End date is before start date"));
    }
    Ok(Json(meals::fetch_meals(&state.db, start, end).await?))
}

#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<u64>,
}

#[tracing::instrument(name = "GET /meals/upcoming", skip(state))]
pub async fn upcoming_meals(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<meal::Model>>, ApiError> {
    let today = state.clock.today();
    Ok(Json(
        meals::upcoming_meals(&state.db, today, query.limit.unwrap_or(20)).await?,
    ))
}

#[tracing::instrument(name = "GET /meals/past", skip(state))]
pub async fn past_meals(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<meal::Model>>, ApiError> {
    let today = state.clock.today();
    Ok(Json(
        meals::past_meals(&state.db, today, query.limit.unwrap_or(20)).await?,
    ))
}
