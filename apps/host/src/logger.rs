use tracing::info;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "BOUND_LOCATION_LOG";

/// Installs the global subscriber. `BOUND_LOCATION_LOG` wins over `RUST_LOG`,
/// which wins over the configured default.
pub fn init_logging(default_filter: Option<&str>) {
    let default_filter = default_filter.unwrap_or("info");
    let filter = std::env::var(LOG_ENV)
        .ok()
        .and_then(|value| EnvFilter::try_new(value).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

/// Logs the start of a run and returns its session id.
pub fn log_session_start() -> String {
    let session_id = uuid::Uuid::new_v4().to_string();
    info!(session = %session_id, "session start");
    session_id
}
