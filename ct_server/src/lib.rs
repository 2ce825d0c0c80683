//! HTTP server for the League custom game tracker.
//!
//! Proxies Leaguepedia reads, drives Riot tournament registration and
//! receives Riot's game callbacks.

pub mod api;
pub mod config;
pub mod logging;
pub mod metrics;
