//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::domain::entities::waitlist_entry::{WaitlistEmail, WaitlistEntry};

/// Create a test waitlist entry with sensible defaults.
pub fn create_test_entry(overrides: impl FnOnce(&mut WaitlistEntry)) -> WaitlistEntry {
    let mut entry = WaitlistEntry {
        id: Uuid::new_v4(),
        email: test_email("existing@example.com"),
        created_at: test_datetime(),
    };
    overrides(&mut entry);
    entry
}

/// Parse an email that the test knows to be valid.
pub fn test_email(raw: &str) -> WaitlistEmail {
    WaitlistEmail::parse(raw).expect("test email must be valid")
}

/// Fixed timestamp for deterministic fixtures.
pub fn test_datetime() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}
