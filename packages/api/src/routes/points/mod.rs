use axum::{Router, routing::get};

use crate::state::AppState;

pub mod balance;
pub mod history;
pub mod leaderboard;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/leaderboard", get(leaderboard::leaderboard))
        .route("/{user_id}/balance", get(balance::get_balance))
        .route("/{user_id}/history", get(history::get_history))
}
