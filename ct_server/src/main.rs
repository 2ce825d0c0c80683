//! League custom game tracker HTTP server.
//!
//! Serves the Leaguepedia proxy and Riot tournament endpoints until Ctrl+C.

use std::net::SocketAddr;

use anyhow::Error;
use ct_server::{api, config::ServerConfig, logging, metrics};
use log::{info, warn};
use pico_args::Arguments;

const HELP: &str = "\
Run the League custom game tracker server

USAGE:
  ct_server [OPTIONS]

OPTIONS:
  --bind         IP:PORT   Server socket bind address  [default: env SERVER_BIND or 127.0.0.1:3000]
  --backend-url  URL       Leaguepedia backend URL     [default: env PYTHON_BACKEND_URL or http://localhost:8000]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:3000)
  RIOT_API_KEY             Riot developer or production API key
  PUBLIC_BASE_URL          Public base URL used for the Riot callback
  APP_ENV                  Set to 'production' to require PUBLIC_BASE_URL
  PYTHON_BACKEND_URL       Leaguepedia backend URL
  METRICS_BIND             Prometheus exporter address, disabled when unset
  (See .env file for all configuration options)
";

struct Args {
    bind: Option<SocketAddr>,
    backend_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        bind: pargs.opt_value_from_str("--bind")?,
        backend_url: pargs.opt_value_from_str("--backend-url")?,
    };

    logging::init();

    let config = ServerConfig::from_env(args.bind, args.backend_url)?;
    let bind = config.bind;

    let validation = config.riot.validate();
    if !validation.is_valid {
        for problem in &validation.errors {
            warn!("Tournament endpoints disabled: {}", problem);
        }
    }
    info!("Leaguepedia backend: {}", config.leaguepedia.backend_url);
    info!("Riot callback URL: {}", config.riot.callback_url(None));

    if let Some(metrics_bind) = config.metrics_bind {
        metrics::init_metrics(metrics_bind).map_err(|e| anyhow::anyhow!(e))?;
        info!("Prometheus metrics exposed at http://{}/metrics", metrics_bind);
    }

    let app = api::create_router(api::AppState::new(config));

    info!("Starting HTTP server on {}", bind);
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", bind, e))?;

    info!("Server is running at http://{}. Press Ctrl+C to stop.", bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
