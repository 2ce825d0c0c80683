//! Receiver for Riot tournament callbacks.
//!
//! Riot posts here whenever a game played with one of our codes changes
//! state. The body is validated, logged and dispatched to the configured
//! [`CallbackHandler`](custom_tracker::callback::CallbackHandler); nothing is
//! stored.
//!
//! # Example
//!
//! ```bash
//! curl -X POST http://localhost:3000/api/tournament/callback \
//!   -H "Content-Type: application/json" \
//!   -d '{"eventType": "gameCompleted", "tournamentCode": "NA04-XYZ", "platformId": "NA1", "gameId": 42}'
//! # {"success":true,"message":"Callback processed successfully"}
//! ```

use axum::{Json, body::Bytes, extract::State};
use custom_tracker::callback::{EventKind, TournamentCallback, dispatch};
use serde::Serialize;

use super::AppState;
use super::error::ApiError;
use crate::metrics;

#[derive(Debug, Serialize)]
pub struct CallbackResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Accept one callback.
///
/// `eventType`, `tournamentCode` and `platformId` must be present and
/// non-empty. Unknown event types are accepted. The body is read as JSON
/// whatever its `Content-Type`.
///
/// # Errors
///
/// - `400 Bad Request`: Body is not JSON, or a required field is missing
pub async fn receive_callback(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CallbackResponse>, ApiError> {
    let payload: TournamentCallback =
        serde_json::from_slice(&body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;
    let event = payload
        .validate()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    tracing::info!(
        event_type = %event.kind,
        tournament_code = %event.tournament_code,
        platform_id = %event.platform_id,
        game_id = event.game_id,
        participants = event.participants.len(),
        "Tournament callback received"
    );

    let kind = dispatch(&*state.callbacks, &event);
    metrics::tournament_callbacks_total(metric_label(&kind));

    Ok(Json(CallbackResponse {
        success: true,
        message: "Callback processed successfully",
    }))
}

/// Only POST is accepted on the callback URL
pub async fn callback_method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

// Unknown tags share one label to keep metric cardinality bounded
fn metric_label(kind: &EventKind) -> &'static str {
    match kind {
        EventKind::GameCreated => "gameCreated",
        EventKind::GameCompleted => "gameCompleted",
        EventKind::TournamentStarted => "tournamentStarted",
        EventKind::TournamentCompleted => "tournamentCompleted",
        EventKind::Unknown(_) => "unknown",
    }
}
