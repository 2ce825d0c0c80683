//! # Custom Tracker
//!
//! Client-side plumbing for a League of Legends custom game tracker.
//!
//! The tracker does not own any game data itself. It forwards requests to two
//! external services and translates their answers:
//!
//! - a Leaguepedia data backend serving regions, tournaments and games
//! - Riot Games' Tournament v5 API, used to register a provider, register a
//!   tournament and mint tournament codes
//!
//! Riot reports lifecycle events for games played with those codes back to a
//! registered callback URL; [`callback`] parses and dispatches those events.
//!
//! ## Core Modules
//!
//! - [`config`]: Riot/Leaguepedia settings and the configuration validator
//! - [`upstream`]: Shared outbound HTTP helper with typed errors
//! - [`leaguepedia`]: Leaguepedia backend client
//! - [`riot`]: Region table, Tournament v5 models and client
//! - [`callback`]: Tournament callback payloads and event dispatch
//!
//! ## Example
//!
//! ```no_run
//! use custom_tracker::riot::{Region, RiotTournamentClient};
//! use custom_tracker::upstream::UpstreamClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = RiotTournamentClient::new(UpstreamClient::new(), "RGAPI-key".to_string(), None);
//! let provider_id = client
//!     .register_provider(Region::Americas, "https://tracker.example/api/tournament/callback")
//!     .await?;
//! println!("provider {provider_id}");
//! # Ok(())
//! # }
//! ```

pub mod callback;
pub mod config;
pub mod leaguepedia;
pub mod riot;
pub mod upstream;

pub use config::{ConfigValidation, LeaguepediaSettings, RiotApiSettings};
pub use upstream::{UpstreamClient, UpstreamError};
