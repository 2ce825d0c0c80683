//! Tournament v5 request payloads.

use serde::{Deserialize, Serialize};

use super::config::Region;
use super::errors::CodeCountError;

/// Provider ID type, opaque and issued by Riot
pub type ProviderId = i64;

/// Tournament ID type, opaque and issued by Riot
pub type TournamentId = i64;

/// Body of the provider registration call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderRegistration {
    pub region: Region,
    /// Callback URL Riot will post game events to
    pub url: String,
}

/// Body of the tournament registration call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentRegistration {
    pub name: String,
    pub provider_id: ProviderId,
}

/// Champion select mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PickType {
    #[default]
    BlindPick,
    DraftMode,
    AllRandom,
    TournamentDraft,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MapType {
    #[default]
    SummonersRift,
    TwistedTreeline,
    HowlingAbyss,
}

/// Who may spectate the game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SpectatorType {
    None,
    Lobbyonly,
    #[default]
    All,
}

/// Default number of players per team
pub const DEFAULT_TEAM_SIZE: u32 = 5;

/// Settings applied to every code of one creation call.
///
/// Empty metadata and an empty allow-list are left off the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentCodeRequest {
    pub team_size: u32,
    pub pick_type: PickType,
    pub map_type: MapType,
    pub spectator_type: SpectatorType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_summoner_ids: Option<Vec<String>>,
}

impl Default for TournamentCodeRequest {
    fn default() -> Self {
        Self {
            team_size: DEFAULT_TEAM_SIZE,
            pick_type: PickType::default(),
            map_type: MapType::default(),
            spectator_type: SpectatorType::default(),
            metadata: None,
            allowed_summoner_ids: None,
        }
    }
}

impl TournamentCodeRequest {
    pub fn new(
        team_size: u32,
        pick_type: PickType,
        map_type: MapType,
        spectator_type: SpectatorType,
    ) -> Self {
        Self {
            team_size,
            pick_type,
            map_type,
            spectator_type,
            metadata: None,
            allowed_summoner_ids: None,
        }
    }

    /// Attach free-text metadata; an empty string clears it
    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        let metadata = metadata.into();
        self.metadata = (!metadata.is_empty()).then_some(metadata);
        self
    }

    /// Restrict the code to these participants; an empty list clears it
    pub fn with_allowed_summoner_ids(mut self, ids: Vec<String>) -> Self {
        self.allowed_summoner_ids = (!ids.is_empty()).then_some(ids);
        self
    }
}

/// Number of codes requested in one call, always within `1..=1000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CodeCount(u32);

impl CodeCount {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 1000;

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for CodeCount {
    fn default() -> Self {
        CodeCount(Self::MIN)
    }
}

impl TryFrom<i64> for CodeCount {
    type Error = CodeCountError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(CodeCountError {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(CodeCount(value as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_code_request_wire_shape() {
        let value = serde_json::to_value(TournamentCodeRequest::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "teamSize": 5,
                "pickType": "BLIND_PICK",
                "mapType": "SUMMONERS_RIFT",
                "spectatorType": "ALL"
            })
        );
    }

    #[test]
    fn test_code_request_optional_fields() {
        let request = TournamentCodeRequest::new(
            3,
            PickType::TournamentDraft,
            MapType::HowlingAbyss,
            SpectatorType::Lobbyonly,
        )
        .with_metadata("week-1")
        .with_allowed_summoner_ids(vec!["abc".to_string()]);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["pickType"], "TOURNAMENT_DRAFT");
        assert_eq!(value["mapType"], "HOWLING_ABYSS");
        assert_eq!(value["spectatorType"], "LOBBYONLY");
        assert_eq!(value["metadata"], "week-1");
        assert_eq!(value["allowedSummonerIds"], json!(["abc"]));
    }

    #[test]
    fn test_code_request_drops_empty_optionals() {
        let request = TournamentCodeRequest::default()
            .with_metadata("")
            .with_allowed_summoner_ids(Vec::new());
        assert_eq!(request.metadata, None);
        assert_eq!(request.allowed_summoner_ids, None);
    }

    #[test]
    fn test_unknown_pick_type_rejected() {
        let result: Result<PickType, _> = serde_json::from_value(json!("RANKED"));
        assert!(result.is_err());
    }

    #[test]
    fn test_code_count_bounds() {
        assert_eq!(CodeCount::try_from(1).unwrap().get(), 1);
        assert_eq!(CodeCount::try_from(1000).unwrap().get(), 1000);
        for value in [0, -1, 1001, i64::MAX] {
            let err = CodeCount::try_from(value).unwrap_err();
            assert_eq!(err.value, value);
        }
    }

    #[test]
    fn test_registration_wire_shape() {
        let provider = ProviderRegistration {
            region: Region::Americas,
            url: "https://t.gg/api/tournament/callback".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&provider).unwrap(),
            json!({"region": "AMERICAS", "url": "https://t.gg/api/tournament/callback"})
        );

        let tournament = TournamentRegistration {
            name: "Cup".to_string(),
            provider_id: 42,
        };
        assert_eq!(
            serde_json::to_value(&tournament).unwrap(),
            json!({"name": "Cup", "providerId": 42})
        );
    }
}
