use std::{net::SocketAddr, time::Duration};

use axum::http::HeaderValue;
use env_helpers::get_env_default;
use secrecy::SecretString;

use crate::infra::error::InfraError;

pub struct AppConfig {
    /// Postgres connection string. Holds credentials, never log it.
    pub database_url: SecretString,
    pub database_max_connections: u32,
    pub database_acquire_timeout: Duration,
    pub bind_addr: SocketAddr,
    /// Origin of the signup page allowed to call the API.
    pub cors_origin: HeaderValue,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, InfraError> {
        let database_url = required("DATABASE_URL", std::env::var("DATABASE_URL").ok())?;
        let database_max_connections: u32 = get_env_default("DATABASE_MAX_CONNECTIONS", 5);
        let database_acquire_timeout_secs: u64 =
            get_env_default("DATABASE_ACQUIRE_TIMEOUT_SECS", 5);

        let bind_addr: SocketAddr = get_env_default(
            "BIND_ADDR",
            SocketAddr::from(([127, 0, 0, 1], 3001)),
        );
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .unwrap_or_else(|_| {
                    tracing::warn!("CORS_ORIGIN is not a valid header value, using default");
                    HeaderValue::from_static("http://localhost:3000")
                });

        Ok(Self {
            database_url: SecretString::from(database_url),
            database_max_connections,
            database_acquire_timeout: Duration::from_secs(database_acquire_timeout_secs),
            bind_addr,
            cors_origin,
        })
    }
}

/// A required variable that is unset or blank is a fatal configuration error.
fn required(var: &'static str, value: Option<String>) -> Result<String, InfraError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(InfraError::ConfigMissing { var }),
    }
}
