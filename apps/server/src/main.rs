use std::{sync::Arc, time::Duration};

use homeboard_api::{
    clock::SystemClock,
    construct_router, db,
    services::chores,
    state::{Features, State},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = config::Config::from_env()?;
    tracing::info!(timezone = %config.timezone, "Starting Homeboard API Service");

    let clock = Arc::new(SystemClock::new(config.timezone));
    let state = Arc::new(
        State::new(
            &config.database_url,
            clock,
            Features {
                points_enabled: config.points_enabled,
                points_default: config.points_default,
            },
        )
        .await?,
    );

    db::init_schema(&state.db).await?;
    db::seed_defaults(&state.db).await?;

    // Overdue pending occurrences get auto-ignored once at startup and
    // then hourly.
    let sweeper = state.clone();
    tokio::spawn(async move {
        loop {
            let today = sweeper.clock.today();
            let now = sweeper.clock.now();
            if let Err(err) = chores::sweep(&sweeper.db, today, now).await {
                tracing::error!(error = %err, "Overdue sweep failed");
            }
            tokio::time::sleep(Duration::from_secs(60 * 60)).await;
        }
    });

    let app = construct_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
