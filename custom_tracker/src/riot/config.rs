//! Region hosts, Tournament v5 endpoint paths and the callback URL builder.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::RegionError;

/// Fallback public base when neither an override nor a configured URL exists.
pub const LOCAL_BASE_URL: &str = "http://localhost:3000";

/// Path Riot posts lifecycle events to, relative to the public base URL.
pub const CALLBACK_PATH: &str = "/api/tournament/callback";

/// Routing region of the Riot API. Each region has its own API host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    Americas,
    Europe,
    Asia,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Americas, Region::Europe, Region::Asia];

    /// Wire name, as accepted by [`Region::from_str`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Americas => "AMERICAS",
            Region::Europe => "EUROPE",
            Region::Asia => "ASIA",
        }
    }

    /// Riot API host for this region
    pub fn base_url(&self) -> &'static str {
        match self {
            Region::Americas => "https://americas.api.riotgames.com",
            Region::Europe => "https://europe.api.riotgames.com",
            Region::Asia => "https://asia.api.riotgames.com",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = RegionError;

    /// Names are matched exactly; `americas` is not a region.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|region| region.as_str() == s)
            .ok_or_else(|| RegionError::Unknown(s.to_string()))
    }
}

/// Tournament v5 operations and their path suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TournamentEndpoint {
    RegisterProvider,
    RegisterTournament,
    CreateCodes,
}

impl TournamentEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            TournamentEndpoint::RegisterProvider => "/lol/tournament/v5/providers",
            TournamentEndpoint::RegisterTournament => "/lol/tournament/v5/tournaments",
            TournamentEndpoint::CreateCodes => "/lol/tournament/v5/codes",
        }
    }
}

/// Platform a tracked game was played on, as reported in callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    BR1,
    EUN1,
    EUW1,
    JP1,
    KR,
    LA1,
    LA2,
    NA1,
    OC1,
    TR1,
    RU,
}

impl Platform {
    pub const ALL: [Platform; 11] = [
        Platform::BR1,
        Platform::EUN1,
        Platform::EUW1,
        Platform::JP1,
        Platform::KR,
        Platform::LA1,
        Platform::LA2,
        Platform::NA1,
        Platform::OC1,
        Platform::TR1,
        Platform::RU,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::BR1 => "BR1",
            Platform::EUN1 => "EUN1",
            Platform::EUW1 => "EUW1",
            Platform::JP1 => "JP1",
            Platform::KR => "KR",
            Platform::LA1 => "LA1",
            Platform::LA2 => "LA2",
            Platform::NA1 => "NA1",
            Platform::OC1 => "OC1",
            Platform::TR1 => "TR1",
            Platform::RU => "RU",
        }
    }

    /// Look up a platform id, `None` if Riot reports one we don't list
    pub fn parse(id: &str) -> Option<Platform> {
        Platform::ALL.into_iter().find(|p| p.as_str() == id)
    }
}

/// Build the callback URL registered with Riot.
///
/// Base precedence: `override_base`, then `configured_base`, then
/// [`LOCAL_BASE_URL`]. Empty strings count as absent.
pub fn callback_url(override_base: Option<&str>, configured_base: Option<&str>) -> String {
    let base = override_base
        .filter(|b| !b.is_empty())
        .or(configured_base.filter(|b| !b.is_empty()))
        .unwrap_or(LOCAL_BASE_URL);

    format!("{}{}", base.trim_end_matches('/'), CALLBACK_PATH)
}
