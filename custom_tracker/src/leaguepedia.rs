//! Client for the Leaguepedia data backend.
//!
//! The backend already shapes its answers, so every operation hands back the
//! decoded JSON untouched.

use serde_json::Value;
use urlencoding::encode;

use crate::config::LeaguepediaSettings;
use crate::upstream::{UpstreamClient, UpstreamError, UpstreamRequest};

/// Resources the backend serves.
///
/// The name is what error messages call the resource, e.g.
/// `Failed to fetch games from Leaguepedia`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Games,
    Regions,
    Tournaments,
    GameDetails,
    TeamLogo,
}

impl Resource {
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Games => "games",
            Resource::Regions => "regions",
            Resource::Tournaments => "tournaments",
            Resource::GameDetails => "game details",
            Resource::TeamLogo => "team logo",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LeaguepediaClient {
    upstream: UpstreamClient,
    base_url: String,
}

impl LeaguepediaClient {
    pub fn new(upstream: UpstreamClient, settings: &LeaguepediaSettings) -> Self {
        Self {
            upstream,
            base_url: settings.backend_url.trim_end_matches('/').to_string(),
        }
    }

    /// Games played in a tournament
    pub async fn games(&self, tournament: &str) -> Result<Value, UpstreamError> {
        self.fetch(self.games_url(tournament)).await
    }

    pub async fn regions(&self) -> Result<Value, UpstreamError> {
        self.fetch(self.regions_url()).await
    }

    /// Tournaments of a region, optionally limited to one year
    pub async fn tournaments(
        &self,
        region: &str,
        year: Option<&str>,
    ) -> Result<Value, UpstreamError> {
        self.fetch(self.tournaments_url(region, year)).await
    }

    pub async fn game_details(&self, game_id: &str) -> Result<Value, UpstreamError> {
        self.fetch(self.game_details_url(game_id)).await
    }

    pub async fn team_logo(&self, team: &str) -> Result<Value, UpstreamError> {
        self.fetch(self.team_logo_url(team)).await
    }

    // --- URL builders ---

    pub fn games_url(&self, tournament: &str) -> String {
        format!("{}/games/{}", self.base_url, encode(tournament))
    }

    pub fn regions_url(&self) -> String {
        format!("{}/regions", self.base_url)
    }

    pub fn tournaments_url(&self, region: &str, year: Option<&str>) -> String {
        let mut url = format!("{}/tournaments/{}", self.base_url, encode(region));
        if let Some(year) = year.filter(|y| !y.is_empty()) {
            url.push_str("?year=");
            url.push_str(&encode(year));
        }
        url
    }

    pub fn game_details_url(&self, game_id: &str) -> String {
        format!("{}/game-details?game_id={}", self.base_url, encode(game_id))
    }

    pub fn team_logo_url(&self, team: &str) -> String {
        format!("{}/team-logo/{}", self.base_url, encode(team))
    }

    async fn fetch(&self, url: String) -> Result<Value, UpstreamError> {
        self.upstream.send_json(UpstreamRequest::get(url)).await
    }
}
