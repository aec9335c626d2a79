use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
}

/// Connection pool shared by every Postgres adapter.
#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    /// Connects and applies the embedded migrations before returning.
    pub async fn new(config: PostgresConfig) -> Result<Self, anyhow::Error> {
        let mut options = ConnectOptions::new(config.database_url);
        options
            .max_connections(20)
            .connect_timeout(Duration::from_secs(5))
            .sqlx_logging(false);

        let db = Database::connect(options).await?;

        sqlx::migrate!("./migrations")
            .run(db.get_postgres_connection_pool())
            .await?;
        info!("database connected and migrations applied");

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
