use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub mod create_meal;
pub mod delete_meal;
pub mod get_meal;
pub mod list_meals;
pub mod recurring_meals;
pub mod update_meal;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_meals::list_meals).post(create_meal::create_meal))
        .route("/upcoming", get(list_meals::upcoming_meals))
        .route("/past", get(list_meals::past_meals))
        .route("/recurring", post(recurring_meals::create_recurring_meals))
        .route(
            "/{meal_id}",
            get(get_meal::get_meal)
                .put(update_meal::update_meal)
                .delete(delete_meal::delete_meal),
        )
}
