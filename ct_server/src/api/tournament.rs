//! Riot tournament registration handlers.
//!
//! This module provides the three setup endpoints:
//! - Registering this service as a tournament provider
//! - Registering a tournament under a provider
//! - Creating tournament codes for a tournament
//!
//! Every handler checks, in order: the Riot configuration (500), required
//! fields (400), the region (400), and for codes the requested count (400).
//! Only then is Riot called. A non-2xx answer from Riot is relayed with its
//! own status code and raw error text.
//!
//! # Examples
//!
//! Register a provider:
//! ```bash
//! curl -X POST http://localhost:3000/api/tournament/provider \
//!   -H "Content-Type: application/json" \
//!   -d '{"region": "AMERICAS"}'
//! ```
//!
//! Create codes:
//! ```bash
//! curl -X POST http://localhost:3000/api/tournament/codes \
//!   -H "Content-Type: application/json" \
//!   -d '{"tournamentId": 123, "region": "AMERICAS", "count": 3}'
//! ```

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use custom_tracker::riot::{
    CodeCount, MapType, PickType, ProviderId, Region, SpectatorType, TournamentCodeRequest,
    TournamentId, models::DEFAULT_TEAM_SIZE,
};
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::{AppState, tracked};

const SERVICE: &str = "riot";

const PROVIDER_FAILED: &str = "Failed to register provider with Riot API";
const TOURNAMENT_FAILED: &str = "Failed to create tournament with Riot API";
const CODES_FAILED: &str = "Failed to generate tournament codes with Riot API";

/// Identifier that may arrive as a JSON number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IdInput {
    Number(i64),
    Text(String),
}

impl IdInput {
    /// Numeric value; zero and non-numeric text count as absent
    pub fn value(&self) -> Option<i64> {
        let id = match self {
            IdInput::Number(n) => Some(*n),
            IdInput::Text(s) => s.trim().parse().ok(),
        };
        id.filter(|id| *id != 0)
    }
}

#[derive(Debug, Deserialize)]
pub struct ProviderPayload {
    pub region: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderResponse {
    pub provider_id: ProviderId,
    pub region: Region,
    pub callback_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTournamentPayload {
    pub name: Option<String>,
    pub provider_id: Option<IdInput>,
    pub region: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentResponse {
    pub tournament_id: TournamentId,
    pub name: String,
    pub provider_id: ProviderId,
    pub region: Region,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCodesPayload {
    pub tournament_id: Option<IdInput>,
    pub region: Option<String>,
    pub count: Option<i64>,
    pub team_size: Option<u32>,
    pub pick_type: Option<PickType>,
    pub map_type: Option<MapType>,
    pub spectator_type: Option<SpectatorType>,
    pub metadata: Option<String>,
    pub allowed_summoner_ids: Option<Vec<String>>,
}

impl CreateCodesPayload {
    /// Settings sent to Riot, with defaults for everything left out
    pub fn settings(&self) -> TournamentCodeRequest {
        TournamentCodeRequest::new(
            self.team_size.unwrap_or(DEFAULT_TEAM_SIZE),
            self.pick_type.unwrap_or_default(),
            self.map_type.unwrap_or_default(),
            self.spectator_type.unwrap_or_default(),
        )
        .with_metadata(self.metadata.clone().unwrap_or_default())
        .with_allowed_summoner_ids(self.allowed_summoner_ids.clone().unwrap_or_default())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodesResponse {
    pub tournament_codes: Vec<String>,
    pub tournament_id: TournamentId,
    pub count: CodeCount,
    pub settings: TournamentCodeRequest,
}

/// Register this service as a tournament provider.
///
/// The callback URL sent to Riot is derived from the configured public base
/// URL.
///
/// # Request Body
///
/// ```json
/// {"region": "AMERICAS"}
/// ```
///
/// # Response
///
/// ```json
/// {"providerId": 1234, "region": "AMERICAS", "callbackUrl": "https://tracker.gg/api/tournament/callback"}
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Region missing or unknown
/// - `500 Internal Server Error`: Configuration invalid, or Riot unreachable
/// - Riot's status: Riot rejected the registration
pub async fn register_provider(
    State(state): State<AppState>,
    payload: Result<Json<ProviderPayload>, JsonRejection>,
) -> Result<Json<ProviderResponse>, ApiError> {
    let client = state.riot()?;
    let Json(payload) = payload?;

    let region = required(payload.region).ok_or_else(|| ApiError::bad_request("Region is required"))?;
    let region = parse_region(&region)?;

    let callback_url = state.config.riot.callback_url(None);
    let provider_id = tracked(SERVICE, client.register_provider(region, &callback_url))
        .await
        .map_err(|e| ApiError::from_riot(e, PROVIDER_FAILED))?;

    Ok(Json(ProviderResponse {
        provider_id,
        region,
        callback_url,
    }))
}

/// Register a tournament under a provider.
///
/// # Request Body
///
/// ```json
/// {"name": "Spring Cup", "providerId": 1234, "region": "AMERICAS"}
/// ```
///
/// `providerId` may be a number or a numeric string.
///
/// # Errors
///
/// - `400 Bad Request`: A field missing, or region unknown
/// - `500 Internal Server Error`: Configuration invalid, or Riot unreachable
/// - Riot's status: Riot rejected the registration
pub async fn create_tournament(
    State(state): State<AppState>,
    payload: Result<Json<CreateTournamentPayload>, JsonRejection>,
) -> Result<Json<TournamentResponse>, ApiError> {
    let client = state.riot()?;
    let Json(payload) = payload?;

    let (Some(name), Some(provider_id), Some(region)) = (
        required(payload.name),
        payload.provider_id.as_ref().and_then(IdInput::value),
        required(payload.region),
    ) else {
        return Err(ApiError::bad_request(
            "Name, providerId, and region are required",
        ));
    };
    let region = parse_region(&region)?;

    let tournament_id = tracked(
        SERVICE,
        client.register_tournament(region, &name, provider_id),
    )
    .await
    .map_err(|e| ApiError::from_riot(e, TOURNAMENT_FAILED))?;

    Ok(Json(TournamentResponse {
        tournament_id,
        name,
        provider_id,
        region,
    }))
}

/// Create tournament codes.
///
/// # Request Body
///
/// ```json
/// {
///   "tournamentId": 123,
///   "region": "AMERICAS",
///   "count": 3,                   // 1-1000, default 1
///   "teamSize": 5,                // default 5
///   "pickType": "BLIND_PICK",     // default BLIND_PICK
///   "mapType": "SUMMONERS_RIFT",  // default SUMMONERS_RIFT
///   "spectatorType": "ALL",       // default ALL
///   "metadata": "week-1",         // optional
///   "allowedSummonerIds": []      // optional
/// }
/// ```
///
/// # Response
///
/// `settings` echoes exactly what was sent to Riot:
/// ```json
/// {
///   "tournamentCodes": ["NA04-...", "NA04-...", "NA04-..."],
///   "tournamentId": 123,
///   "count": 3,
///   "settings": {"teamSize": 5, "pickType": "BLIND_PICK", "mapType": "SUMMONERS_RIFT", "spectatorType": "ALL"}
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Field missing, region unknown, or count out of range
/// - `500 Internal Server Error`: Configuration invalid, or Riot unreachable
/// - Riot's status: Riot rejected the request
pub async fn create_codes(
    State(state): State<AppState>,
    payload: Result<Json<CreateCodesPayload>, JsonRejection>,
) -> Result<Json<CodesResponse>, ApiError> {
    let client = state.riot()?;
    let Json(payload) = payload?;

    let (Some(tournament_id), Some(region)) = (
        payload.tournament_id.as_ref().and_then(IdInput::value),
        required(payload.region.clone()),
    ) else {
        return Err(ApiError::bad_request("Tournament ID and region are required"));
    };
    let region = parse_region(&region)?;

    let count = CodeCount::try_from(payload.count.unwrap_or(i64::from(CodeCount::MIN)))
        .map_err(|_| ApiError::bad_request("Count must be between 1 and 1000"))?;

    let settings = payload.settings();
    let tournament_codes = tracked(
        SERVICE,
        client.create_codes(region, tournament_id, count, &settings),
    )
    .await
    .map_err(|e| ApiError::from_riot(e, CODES_FAILED))?;

    Ok(Json(CodesResponse {
        tournament_codes,
        tournament_id,
        count,
        settings,
    }))
}

/// Present and non-empty
fn required(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

fn parse_region(name: &str) -> Result<Region, ApiError> {
    name.parse().map_err(|_| {
        tracing::debug!("Rejected region {:?}", name);
        ApiError::bad_request("Invalid region")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_input_values() {
        let parse = |v| serde_json::from_value::<IdInput>(v).unwrap().value();
        assert_eq!(parse(json!(123)), Some(123));
        assert_eq!(parse(json!("456")), Some(456));
        assert_eq!(parse(json!(0)), None);
        assert_eq!(parse(json!("")), None);
        assert_eq!(parse(json!("abc")), None);
    }

    #[test]
    fn test_codes_payload_defaults() {
        let payload: CreateCodesPayload =
            serde_json::from_value(json!({"tournamentId": 1, "region": "ASIA"})).unwrap();
        assert_eq!(payload.settings(), TournamentCodeRequest::default());
    }

    #[test]
    fn test_codes_payload_overrides() {
        let payload: CreateCodesPayload = serde_json::from_value(json!({
            "tournamentId": 1,
            "region": "ASIA",
            "teamSize": 1,
            "pickType": "ALL_RANDOM",
            "mapType": "HOWLING_ABYSS",
            "spectatorType": "NONE",
            "metadata": "",
            "allowedSummonerIds": ["a", "b"]
        }))
        .unwrap();

        let settings = payload.settings();
        assert_eq!(settings.team_size, 1);
        assert_eq!(settings.pick_type, PickType::AllRandom);
        assert_eq!(settings.map_type, MapType::HowlingAbyss);
        assert_eq!(settings.spectator_type, SpectatorType::None);
        assert_eq!(settings.metadata, None);
        assert_eq!(settings.allowed_summoner_ids, Some(vec!["a".into(), "b".into()]));
    }

    #[test]
    fn test_parse_region() {
        assert_eq!(parse_region("EUROPE").unwrap(), Region::Europe);
        assert!(matches!(parse_region("europe"), Err(ApiError::BadRequest(m)) if m == "Invalid region"));
    }
}
