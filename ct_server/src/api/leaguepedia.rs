//! Leaguepedia proxy handlers.
//!
//! Each handler forwards one GET to the Leaguepedia backend and relays the
//! JSON it gets back. Any failure, whatever the backend status, becomes
//! `500 {"error": "Failed to fetch <resource> from Leaguepedia"}`.
//!
//! # Examples
//!
//! ```bash
//! curl http://localhost:3000/api/leaguepedia/regions
//! curl "http://localhost:3000/api/leaguepedia/tournaments/Korea?year=2024"
//! ```

use axum::{
    Json,
    extract::{Path, Query, State},
};
use custom_tracker::leaguepedia::Resource;
use custom_tracker::upstream::UpstreamError;
use serde::Deserialize;
use serde_json::Value;
use std::future::Future;

use super::error::ApiError;
use super::{AppState, tracked};

const SERVICE: &str = "leaguepedia";

#[derive(Debug, Deserialize)]
pub struct TournamentsQuery {
    pub year: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GameDetailsQuery {
    pub game_id: Option<String>,
}

pub async fn games(
    State(state): State<AppState>,
    Path(tournament): Path<String>,
) -> Result<Json<Value>, ApiError> {
    proxy(Resource::Games, state.leaguepedia().games(&tournament)).await
}

pub async fn regions(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    proxy(Resource::Regions, state.leaguepedia().regions()).await
}

/// Tournaments of a region; `year` is forwarded only when given.
pub async fn tournaments(
    State(state): State<AppState>,
    Path(region): Path<String>,
    Query(query): Query<TournamentsQuery>,
) -> Result<Json<Value>, ApiError> {
    let client = state.leaguepedia();
    proxy(
        Resource::Tournaments,
        client.tournaments(&region, query.year.as_deref()),
    )
    .await
}

/// # Errors
///
/// - `400 Bad Request`: `game_id` missing
/// - `500 Internal Server Error`: Backend failure
pub async fn game_details(
    State(state): State<AppState>,
    Query(query): Query<GameDetailsQuery>,
) -> Result<Json<Value>, ApiError> {
    let game_id = query
        .game_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::bad_request("game_id is required"))?;

    proxy(Resource::GameDetails, state.leaguepedia().game_details(&game_id)).await
}

pub async fn team_logo(
    State(state): State<AppState>,
    Path(team): Path<String>,
) -> Result<Json<Value>, ApiError> {
    proxy(Resource::TeamLogo, state.leaguepedia().team_logo(&team)).await
}

async fn proxy<F>(resource: Resource, call: F) -> Result<Json<Value>, ApiError>
where
    F: Future<Output = Result<Value, UpstreamError>>,
{
    match tracked(SERVICE, call).await {
        Ok(body) => Ok(Json(body)),
        Err(e) => {
            tracing::error!(
                resource = resource.name(),
                upstream_status = e.status(),
                "Error fetching {}: {}",
                resource.name(),
                e
            );
            Err(ApiError::Leaguepedia(resource.name()))
        }
    }
}
