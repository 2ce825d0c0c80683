//! Tournament callbacks.
//!
//! Riot posts an event to the provider's callback URL whenever a game played
//! with one of its codes changes state. Events are validated, then routed to
//! a [`CallbackHandler`]. Nothing is persisted.

pub mod dispatch;
pub mod models;

pub use dispatch::{CallbackHandler, LoggingHandler, dispatch};
pub use models::{
    CallbackError, EventKind, GameData, Participant, TournamentCallback, ValidCallback,
};
