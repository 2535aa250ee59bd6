use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    app_error::{AppError, AppResult},
    infra::db::Database,
};

pub mod waitlist;

/// Name of the unique index that enforces one entry per normalized email.
pub const WAITLIST_EMAIL_UNIQUE_INDEX: &str = "waitlist_entries_email_key";

#[derive(Clone)]
pub struct PostgresPersistence {
    db: Arc<Database>,
}

impl PostgresPersistence {
    pub fn new(db: Arc<Database>) -> Self {
        PostgresPersistence { db }
    }

    /// The shared pool, connecting on first use.
    pub async fn pool(&self) -> AppResult<PgPool> {
        self.db.get_connection().await.map_err(|err| {
            // Display only: the source chain can carry the connection string.
            tracing::error!(error = %err, "Database unavailable");
            AppError::Database(err.to_string())
        })
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err)
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some(WAITLIST_EMAIL_UNIQUE_INDEX) =>
            {
                AppError::DuplicateEmail
            }
            _ => {
                // Log the actual error for debugging, but don't expose details
                tracing::error!(error = %err, "Database error");
                AppError::Database("Database operation failed".into())
            }
        }
    }
}
