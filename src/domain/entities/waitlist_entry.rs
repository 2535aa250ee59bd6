use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::validators::is_valid_email,
};

/// A normalized (trimmed, lower-cased) and validated email address.
///
/// This is the only form in which an email reaches the store, so two inputs
/// that differ only in casing or surrounding whitespace share one identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WaitlistEmail(String);

impl WaitlistEmail {
    pub fn parse(raw: &str) -> AppResult<Self> {
        let normalized = normalize_email(raw);
        if !is_valid_email(&normalized) {
            return Err(AppError::InvalidEmail);
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WaitlistEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[derive(Debug, Clone, Serialize)]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub email: WaitlistEmail,
    pub created_at: DateTime<Utc>,
}
