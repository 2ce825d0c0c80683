//! Riot Games Tournament v5 integration.
//!
//! Setting up tracked custom games takes three independent calls:
//!
//! 1. register a provider (the organisation, with its callback URL)
//! 2. register a tournament under that provider
//! 3. create tournament codes players redeem to join games
//!
//! The crate keeps no record of the returned identifiers and does not check
//! that the calls happen in that order; Riot rejects out-of-order calls itself.

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod setup;

pub use client::{RIOT_TOKEN_HEADER, RiotTournamentClient};
pub use config::{CALLBACK_PATH, Platform, Region, TournamentEndpoint, callback_url};
pub use errors::{CodeCountError, RegionError, SetupError};
pub use models::{
    CodeCount, MapType, PickType, ProviderId, ProviderRegistration, SpectatorType,
    TournamentCodeRequest, TournamentId, TournamentRegistration,
};
pub use setup::{SetupSummary, TournamentSetup};
