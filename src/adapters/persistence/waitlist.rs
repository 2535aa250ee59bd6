use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::WaitlistRepo,
    domain::entities::waitlist_entry::{WaitlistEmail, WaitlistEntry},
};

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn create_unique(&self, email: &WaitlistEmail) -> AppResult<WaitlistEntry> {
        let pool = self.pool().await?;

        // Single statement: the unique index rejects a concurrent duplicate.
        let row = sqlx::query(
            r#"
            INSERT INTO waitlist_entries (id, email)
            VALUES ($1, $2)
            RETURNING id, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email.as_str())
        .fetch_one(&pool)
        .await
        .map_err(AppError::from)?;

        Ok(WaitlistEntry {
            id: row.get("id"),
            email: email.clone(),
            created_at: row.get("created_at"),
        })
    }
}
