use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::{WaitlistEmail, WaitlistEntry},
};

// ============================================================================
// Repository Trait
// ============================================================================

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    /// Insert a new entry in one atomic step guarded by the store's unique index.
    ///
    /// Must return `AppError::DuplicateEmail` when the email already exists and
    /// `AppError::Database` for any other failure.
    async fn create_unique(&self, email: &WaitlistEmail) -> AppResult<WaitlistEntry>;
}

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub confirmed: bool,
}

// ============================================================================
// Use Cases
// ============================================================================

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>) -> Self {
        Self { repo }
    }

    /// Turn a raw request body into a persisted waitlist entry.
    pub async fn register(&self, raw_body: &[u8]) -> AppResult<Registration> {
        let email = extract_email(raw_body)?;

        self.join(email.as_str()).await
    }

    /// Normalize, validate and persist one email.
    ///
    /// A second registration of the same address fails with `DuplicateEmail`;
    /// there is no check-then-insert here, the store decides.
    pub async fn join(&self, raw_email: &str) -> AppResult<Registration> {
        let email = WaitlistEmail::parse(raw_email)?;

        match self.repo.create_unique(&email).await {
            Ok(entry) => {
                tracing::info!(entry_id = %entry.id, "Waitlist entry created");
                Ok(Registration { confirmed: true })
            }
            Err(err) => {
                tracing::debug!(error = %err, "Waitlist registration not accepted");
                Err(err)
            }
        }
    }
}

/// The body must be a JSON object whose `email` member is a string.
fn extract_email(raw_body: &[u8]) -> AppResult<String> {
    let object: Map<String, Value> = serde_json::from_slice(raw_body)
        .map_err(|e| AppError::MalformedRequest(e.to_string()))?;

    match object.get("email") {
        Some(Value::String(email)) => Ok(email.clone()),
        Some(_) => Err(AppError::MalformedRequest("email must be a string".into())),
        None => Err(AppError::MalformedRequest("missing field `email`".into())),
    }
}
