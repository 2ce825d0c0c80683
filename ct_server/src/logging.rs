//! Structured logging configuration.
//!
//! Log records from the `custom_tracker` library (emitted through the `log`
//! facade) are bridged into the same `tracing` subscriber.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Calls slower than this are logged at warn level
pub const SLOW_UPSTREAM_MS: u64 = 1000;

/// Initialize structured logging
///
/// Log levels are configurable via the `RUST_LOG` env var.
///
/// # Example
///
/// ```no_run
/// ct_server::logging::init();
/// tracing::info!("Server starting");
/// ```
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,reqwest=warn"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Structured logging initialized");
}

/// Log one outbound call to the Leaguepedia backend or Riot
///
/// # Arguments
///
/// * `service` - Upstream name (`leaguepedia`, `riot`)
/// * `outcome` - `ok` or the upstream error kind
/// * `status` - Upstream status code, if it answered
/// * `duration_ms` - Call duration in milliseconds
pub fn log_upstream_call(service: &str, outcome: &str, status: Option<u16>, duration_ms: u64) {
    if duration_ms > SLOW_UPSTREAM_MS {
        tracing::warn!(
            service = service,
            outcome = outcome,
            upstream_status = status,
            duration_ms = duration_ms,
            "Slow upstream call"
        );
    } else {
        tracing::debug!(
            service = service,
            outcome = outcome,
            upstream_status = status,
            duration_ms = duration_ms,
            "Upstream call completed"
        );
    }
}

/// Log a completed API request
pub fn log_api_request(method: &str, path: &str, status_code: u16, duration_ms: u64) {
    tracing::info!(
        http_method = method,
        http_path = path,
        http_status = status_code,
        duration_ms = duration_ms,
        "API request completed"
    );
}
