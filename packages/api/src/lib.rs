use std::sync::Arc;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use state::State;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, decompression::RequestDecompressionLayer,
};

pub mod clock;
pub mod db;
pub mod entity;
pub mod error;
mod routes;
pub mod services;
pub mod state;

pub use axum;
pub use sea_orm;

pub fn construct_router(state: Arc<State>) -> Router {
    let router = Router::new()
        .route("/", get(app_info))
        .nest("/health", routes::health::routes())
        .nest("/users", routes::users::routes())
        .nest("/chores", routes::chores::routes())
        .nest("/points", routes::points::routes())
        .nest("/rewards", routes::rewards::routes())
        .nest("/meals", routes::meals::routes())
        .with_state(state)
        .route(
            "/version",
            get(|| async { env!("CARGO_PKG_VERSION") }),
        )
        .layer(CorsLayer::permissive())
        .layer(
            ServiceBuilder::new()
                .layer(RequestDecompressionLayer::new())
                .layer(CompressionLayer::new()),
        );

    Router::new().nest("/api/v1", router)
}

#[tracing::instrument(name = "GET /", skip(state))]
async fn app_info(
    axum::extract::State(state): axum::extract::State<state::AppState>,
) -> Json<Value> {
    Json(json!({
        "name": "homeboard",
        "version": env!("CARGO_PKG_VERSION"),
        "pointsEnabled": state.features.points_enabled,
    }))
}
