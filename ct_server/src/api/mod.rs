//! HTTP API for the custom game tracker.
//!
//! # Architecture
//!
//! The API is built with:
//! - **Axum**: Async web framework
//! - **Tower**: Middleware for CORS and request ids
//! - **custom_tracker**: Leaguepedia/Riot clients and callback dispatch
//!
//! Handlers hold no state between requests. Each one performs at most one
//! outbound call and translates its outcome into a response.
//!
//! # Modules
//!
//! - [`leaguepedia`]: Read-only proxies to the Leaguepedia backend
//! - [`tournament`]: Riot provider, tournament and code registration
//! - [`callback`]: Receiver for Riot's game lifecycle callbacks
//! - [`error`]: Error type shared by all handlers
//! - [`request_id`]: Request correlation middleware
//!
//! # Endpoints Overview
//!
//! ```text
//! GET  /api/leaguepedia/games/{tournament}         - Games of a tournament
//! GET  /api/leaguepedia/regions                    - Region list
//! GET  /api/leaguepedia/tournaments/{region}?year= - Tournaments of a region
//! GET  /api/leaguepedia/game-details?game_id=      - Details of one game
//! GET  /api/leaguepedia/team-logo/{team}           - Logo URL of a team
//! POST /api/tournament/provider                    - Register provider
//! POST /api/tournament/create                      - Register tournament
//! POST /api/tournament/codes                       - Create tournament codes
//! POST /api/tournament/callback                    - Riot event receiver
//! GET  /api/tournament/callback                    - Always 405
//! GET  /api/tournament/status                      - Static status descriptor
//! ```
//!
//! # CORS
//!
//! CORS is configured permissively; the browser front-end may be served from
//! another origin.

pub mod callback;
pub mod error;
pub mod leaguepedia;
pub mod request_id;
pub mod tournament;

use axum::{
    Json, Router,
    routing::{get, post},
};
use custom_tracker::callback::{CallbackHandler, LoggingHandler};
use custom_tracker::leaguepedia::LeaguepediaClient;
use custom_tracker::riot::RiotTournamentClient;
use custom_tracker::upstream::{UpstreamClient, UpstreamError};
use serde_json::{Value, json};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;

use crate::config::ServerConfig;
use crate::{logging, metrics};
use error::ApiError;

/// Service name reported by the status endpoint
pub const SERVICE_NAME: &str = "League Custom Tracker - Tournament API";

/// Application state shared across all HTTP handlers.
///
/// Cloned for each request (cheap due to Arc wrappers and the shared
/// connection pool inside [`UpstreamClient`]).
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub upstream: UpstreamClient,
    pub callbacks: Arc<dyn CallbackHandler + Send + Sync>,
}

impl AppState {
    /// State with the logging callback handler
    pub fn new(config: ServerConfig) -> Self {
        Self::with_callback_handler(config, Arc::new(LoggingHandler))
    }

    pub fn with_callback_handler(
        config: ServerConfig,
        callbacks: Arc<dyn CallbackHandler + Send + Sync>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            upstream: UpstreamClient::new(),
            callbacks,
        }
    }

    pub fn leaguepedia(&self) -> LeaguepediaClient {
        LeaguepediaClient::new(self.upstream.clone(), &self.config.leaguepedia)
    }

    /// Riot client, after validating the Riot settings.
    ///
    /// # Errors
    ///
    /// [`ApiError::Configuration`] listing every validation problem
    pub fn riot(&self) -> Result<RiotTournamentClient, ApiError> {
        let settings = &self.config.riot;
        let validation = settings.validate();
        let api_key = match settings.api_key() {
            Some(key) if validation.is_valid => key,
            _ => return Err(ApiError::Configuration(validation.errors)),
        };

        Ok(RiotTournamentClient::new(
            self.upstream.clone(),
            api_key.to_string(),
            settings.host_override.clone(),
        ))
    }
}

/// Create the complete API router with all endpoints and middleware.
///
/// # Example
///
/// ```rust,no_run
/// # use ct_server::api::{create_router, AppState};
/// # use ct_server::config::ServerConfig;
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ServerConfig::from_env(None, None)?;
/// let listener = tokio::net::TcpListener::bind(config.bind).await?;
/// let app = create_router(AppState::new(config));
/// axum::serve(listener, app).await?;
/// # Ok(())
/// # }
/// ```
pub fn create_router(state: AppState) -> Router {
    let leaguepedia_routes = Router::new()
        .route("/games/{tournament}", get(leaguepedia::games))
        .route("/regions", get(leaguepedia::regions))
        .route("/tournaments/{region}", get(leaguepedia::tournaments))
        .route("/game-details", get(leaguepedia::game_details))
        .route("/team-logo/{team}", get(leaguepedia::team_logo));

    let tournament_routes = Router::new()
        .route("/provider", post(tournament::register_provider))
        .route("/create", post(tournament::create_tournament))
        .route("/codes", post(tournament::create_codes))
        .route(
            "/callback",
            post(callback::receive_callback).get(callback::callback_method_not_allowed),
        )
        .route("/status", get(status));

    Router::new()
        .nest("/api/leaguepedia", leaguepedia_routes)
        .nest("/api/tournament", tournament_routes)
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Static liveness descriptor.
///
/// # Example
///
/// ```bash
/// curl http://localhost:3000/api/tournament/status
/// # {"status":"active","service":"League Custom Tracker - Tournament API","version":"1.0.0",...}
/// ```
async fn status() -> Json<Value> {
    Json(json!({
        "status": "active",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "endpoints": {
            "callback": "/api/tournament/callback",
            "status": "/api/tournament/status",
            "provider": "/api/tournament/provider",
            "create": "/api/tournament/create",
            "codes": "/api/tournament/codes"
        }
    }))
}

/// Await one upstream call, recording its duration and outcome.
pub(crate) async fn tracked<T, F>(service: &'static str, call: F) -> Result<T, UpstreamError>
where
    F: Future<Output = Result<T, UpstreamError>>,
{
    let started = Instant::now();
    let result = call.await;
    let duration_ms = started.elapsed().as_millis() as u64;

    let (outcome, status) = match &result {
        Ok(_) => ("ok", None),
        Err(e) => (e.kind(), e.status()),
    };
    logging::log_upstream_call(service, outcome, status, duration_ms);
    metrics::upstream_requests_total(service, outcome);

    result
}
