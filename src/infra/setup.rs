use crate::{
    adapters::{http::app_state::AppState, persistence::PostgresPersistence},
    application::use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
    infra::{config::AppConfig, db::Database, error::InfraError},
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "app.log";

/// Build the application state. The database is not contacted here; the pool
/// is established by the first request that needs it.
pub fn init_app_state() -> Result<AppState, InfraError> {
    let config = AppConfig::from_env()?;

    let database = Arc::new(Database::from_config(&config));
    let postgres_arc = Arc::new(PostgresPersistence::new(database));

    let waitlist_use_cases = WaitlistUseCases::new(postgres_arc as Arc<dyn WaitlistRepo>);

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    })
}

pub fn init_tracing() -> Result<(), InfraError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "waitlist=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs)
    let file = File::create(LOG_FILE).map_err(|source| InfraError::LogFile {
        path: LOG_FILE,
        source,
    })?;
    let json_layer = fmt::layer()
        .json()
        .with_writer(file)
        .with_current_span(true)
        .with_span_list(true);

    install_subscriber(
        tracing_subscriber::registry()
            .with(filter)
            .with(console_layer)
            .with(json_layer),
    )
}

fn install_subscriber(subscriber: impl SubscriberInitExt) -> Result<(), InfraError> {
    subscriber.try_init().map_err(InfraError::TracingInit)
}
