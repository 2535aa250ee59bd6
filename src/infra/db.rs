use std::{sync::Arc, time::Duration};

use secrecy::{ExposeSecret, SecretString};
use sqlx::{PgPool, migrate::Migrator, postgres::PgPoolOptions};
use tracing::info;

use crate::infra::{config::AppConfig, error::InfraError, shared_init::SharedInit};

/// Waitlist schema. Applying it more than once is a no-op, the migrator keeps
/// track of what already ran.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Process-wide handle to the Postgres pool.
///
/// The pool is created on the first `get_connection` call and reused after that.
/// Concurrent first calls share one connection attempt; if it fails the next
/// call tries again.
pub struct Database {
    database_url: SecretString,
    max_connections: u32,
    acquire_timeout: Duration,
    pool: SharedInit<PgPool, InfraError>,
}

impl Database {
    pub fn new(database_url: SecretString, max_connections: u32, acquire_timeout: Duration) -> Self {
        Self {
            database_url,
            max_connections,
            acquire_timeout,
            pool: SharedInit::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.database_url.clone(),
            config.database_max_connections,
            config.database_acquire_timeout,
        )
    }

    pub async fn get_connection(&self) -> Result<PgPool, Arc<InfraError>> {
        self.pool.get_or_try_init(|| self.connect()).await
    }

    pub fn is_connected(&self) -> bool {
        self.pool.get().is_some()
    }

    pub fn connection_attempts(&self) -> u64 {
        self.pool.completed_attempts()
    }

    async fn connect(&self) -> Result<PgPool, InfraError> {
        info!("Connecting to database");

        let pool = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            .connect(self.database_url.expose_secret())
            .await
            .map_err(InfraError::DatabaseConnection)?;

        MIGRATOR.run(&pool).await.map_err(InfraError::Migration)?;

        info!("Connected to database!");
        Ok(pool)
    }
}
