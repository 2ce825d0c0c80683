//! Prometheus metrics.
//!
//! Counters are always recorded; without an installed exporter the `metrics`
//! macros are no-ops.
//!
//! # Metrics
//!
//! - `http_requests_total{method, status}`
//! - `upstream_requests_total{service, outcome}`
//! - `tournament_callbacks_total{event}`

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Initialize Prometheus metrics exporter.
///
/// Metrics will be available at `http://<addr>/metrics`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), String> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| format!("Failed to install Prometheus exporter: {}", e))
}

/// Record HTTP request.
pub fn http_requests_total(method: &str, status: u16) {
    metrics::counter!("http_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record one outbound call; `outcome` is `ok` or an upstream error kind.
pub fn upstream_requests_total(service: &'static str, outcome: &'static str) {
    metrics::counter!("upstream_requests_total",
        "service" => service,
        "outcome" => outcome
    )
    .increment(1);
}

/// Record a validated tournament callback.
pub fn tournament_callbacks_total(event: &'static str) {
    metrics::counter!("tournament_callbacks_total", "event" => event).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_without_exporter() {
        http_requests_total("GET", 200);
        upstream_requests_total("riot", "ok");
        tournament_callbacks_total("gameCreated");
    }
}
