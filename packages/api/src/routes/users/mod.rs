use axum::{Router, routing::get};

use crate::state::AppState;

pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod update_user;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_users::list_users).post(create_user::create_user),
        )
        .route(
            "/{user_id}",
            get(get_user::get_user)
                .put(update_user::update_user)
                .delete(delete_user::delete_user),
        )
}
