use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

pub mod available_chores;
pub mod claim_chore;
pub mod complete_chore;
pub mod create_definition;
pub mod delete_definition;
pub mod ignore_chore;
pub mod list_chores;
pub mod list_definitions;
pub mod templates;
pub mod update_definition;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_chores::list_chores))
        .route("/available", get(available_chores::available_chores))
        .route(
            "/{occurrence_id}/complete",
            post(complete_chore::complete_chore),
        )
        .route("/{occurrence_id}/ignore", post(ignore_chore::ignore_chore))
        .route("/{occurrence_id}/claim", post(claim_chore::claim_chore))
        .route(
            "/definitions",
            get(list_definitions::list_definitions)
                .post(create_definition::create_definition),
        )
        .route(
            "/definitions/adhoc",
            get(list_definitions::adhoc_definitions),
        )
        .route(
            "/definitions/user/{user_id}",
            get(list_definitions::definitions_for_user),
        )
        .route(
            "/definitions/{definition_id}",
            put(update_definition::update_definition)
                .get(list_definitions::get_definition)
                .delete(delete_definition::delete_definition),
        )
        .route(
            "/templates",
            get(templates::list_templates).post(templates::create_template),
        )
        .route("/categories", get(templates::list_categories))
}
