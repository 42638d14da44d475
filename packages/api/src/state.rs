use std::{sync::Arc, time::Duration};

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::clock::Clock;

pub type AppState = Arc<State>;

/// Feature toggles carried in shared state.
#[derive(Clone, Debug)]
pub struct Features {
    /// Gates ledger credits and the whole rewards surface. Chores still
    /// complete when disabled; no ledger entry is written.
    pub points_enabled: bool,
    /// Point value assigned to chores created without one.
    pub points_default: i64,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            points_enabled: true,
            points_default: 1,
        }
    }
}

pub struct State {
    pub db: DatabaseConnection,
    pub clock: Arc<dyn Clock>,
    pub features: Features,
}

impl State {
    pub async fn new(
        database_url: &str,
        clock: Arc<dyn Clock>,
        features: Features,
    ) -> Result<Self, DbErr> {
        let mut opt = ConnectOptions::new(database_url.to_owned());
        opt.max_connections(10)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(8))
            .sqlx_logging(false);

        let db = Database::connect(opt).await?;

        Ok(Self {
            db,
            clock,
            features,
        })
    }

    /// Wrap an existing connection, used by tests running on in-memory
    /// SQLite.
    pub fn with_connection(
        db: DatabaseConnection,
        clock: Arc<dyn Clock>,
        features: Features,
    ) -> Self {
        Self {
            db,
            clock,
            features,
        }
    }
}
