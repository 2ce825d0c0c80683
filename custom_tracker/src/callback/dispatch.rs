//! Event dispatch for validated callbacks.

use super::models::{EventKind, ValidCallback};

/// Reacts to tournament lifecycle events.
///
/// Every method has a logging default, so an implementor only overrides the
/// events it cares about.
pub trait CallbackHandler {
    fn game_created(&self, event: &ValidCallback) {
        log::info!("Game created: {:?} ({})", event.game_id, event.tournament_code);
    }

    fn game_completed(&self, event: &ValidCallback) {
        log::info!("Game completed: {:?} ({})", event.game_id, event.tournament_code);
    }

    fn tournament_started(&self, event: &ValidCallback) {
        log::info!("Tournament started: {}", event.tournament_code);
    }

    fn tournament_completed(&self, event: &ValidCallback) {
        log::info!("Tournament completed: {}", event.tournament_code);
    }

    /// Tags outside the known set are accepted and otherwise ignored
    fn unknown(&self, event: &ValidCallback, tag: &str) {
        log::warn!("Unknown event type: {} ({})", tag, event.tournament_code);
    }
}

/// Handler that only logs
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingHandler;

impl CallbackHandler for LoggingHandler {}

/// Route `event` to the handler method matching its kind.
///
/// Returns the kind that was dispatched.
pub fn dispatch<H: CallbackHandler + ?Sized>(handler: &H, event: &ValidCallback) -> EventKind {
    if event.platform().is_none() {
        log::debug!("Callback from unlisted platform {}", event.platform_id);
    }

    match &event.kind {
        EventKind::GameCreated => handler.game_created(event),
        EventKind::GameCompleted => handler.game_completed(event),
        EventKind::TournamentStarted => handler.tournament_started(event),
        EventKind::TournamentCompleted => handler.tournament_completed(event),
        EventKind::Unknown(tag) => handler.unknown(event, tag),
    }

    event.kind.clone()
}
