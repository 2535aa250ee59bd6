//! In-memory mock implementations of the waitlist repository trait.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::WaitlistRepo,
    domain::entities::waitlist_entry::{WaitlistEmail, WaitlistEntry},
};

/// In-memory implementation of WaitlistRepo for testing.
///
/// The map is keyed by normalized email and the insert happens under one lock,
/// which plays the role of the unique index.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<HashMap<String, WaitlistEntry>>,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with initial entries for testing.
    pub fn with_entries(entries: Vec<WaitlistEntry>) -> Self {
        let map = entries
            .into_iter()
            .map(|e| (e.email.as_str().to_string(), e))
            .collect();
        Self {
            entries: Mutex::new(map),
        }
    }

    /// Get all entries (for test assertions).
    pub fn get_all(&self) -> Vec<WaitlistEntry> {
        self.entries.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn create_unique(&self, email: &WaitlistEmail) -> AppResult<WaitlistEntry> {
        let mut entries = self.entries.lock().unwrap();

        if entries.contains_key(email.as_str()) {
            return Err(AppError::DuplicateEmail);
        }

        let entry = WaitlistEntry {
            id: Uuid::new_v4(),
            email: email.clone(),
            created_at: chrono::Utc::now(),
        };
        entries.insert(email.as_str().to_string(), entry.clone());
        Ok(entry)
    }
}

/// Repo whose store is always unreachable.
#[derive(Default)]
pub struct FailingWaitlistRepo;

#[async_trait]
impl WaitlistRepo for FailingWaitlistRepo {
    async fn create_unique(&self, _email: &WaitlistEmail) -> AppResult<WaitlistEntry> {
        Err(AppError::Database(
            "connection refused (postgres://waitlist@10.0.0.3:5432)".into(),
        ))
    }
}
