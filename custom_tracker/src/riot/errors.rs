//! Tournament error types.

use thiserror::Error;

use crate::upstream::UpstreamError;

/// Region lookup errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegionError {
    /// Name is not one of the fixed routing regions
    #[error("Invalid region: {0}")]
    Unknown(String),
}

/// Code count outside the range Riot accepts
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Count must be between {min} and {max}, got {value}")]
pub struct CodeCountError {
    pub value: i64,
    pub min: u32,
    pub max: u32,
}

/// Errors from the multi-step tournament setup
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Provider registration failed: {0}")]
    Provider(#[source] UpstreamError),

    #[error("Tournament registration failed: {0}")]
    Tournament(#[source] UpstreamError),

    #[error("Tournament code creation failed: {0}")]
    Codes(#[source] UpstreamError),
}
