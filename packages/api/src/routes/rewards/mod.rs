use axum::{
    Router,
    routing::{get, post, put},
};

use crate::error::ApiError;
use crate::state::{AppState, State};

pub mod create_reward;
pub mod list_rewards;
pub mod redeem_reward;
pub mod redemption_history;
pub mod toggle_reward;
pub mod update_reward;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_rewards::list_rewards).post(create_reward::create_reward),
        )
        .route("/redemptions", get(redemption_history::redemption_history))
        .route(
            "/{reward_id}",
            put(update_reward::update_reward).delete(toggle_reward::deactivate_reward),
        )
        .route("/{reward_id}/toggle", post(toggle_reward::toggle_reward))
        .route("/{reward_id}/redeem", post(redeem_reward::redeem_reward))
}

/// The whole rewards surface is hidden when points are disabled.
pub(crate) fn ensure_points_enabled(state: &State) -> Result<(), ApiError> {
    if !state.features.points_enabled {
        return Err(ApiError::forbidden("Rewards are not enabled"));
    }
    Ok(())
}
