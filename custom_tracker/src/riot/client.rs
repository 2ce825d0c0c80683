//! Riot Tournament v5 client.

use serde_json::Value;

use super::config::{Region, TournamentEndpoint};
use super::models::{
    CodeCount, ProviderId, ProviderRegistration, TournamentCodeRequest, TournamentId,
    TournamentRegistration,
};
use crate::upstream::{UpstreamClient, UpstreamError, UpstreamRequest};

/// Header carrying the API key
pub const RIOT_TOKEN_HEADER: &str = "X-Riot-Token";

/// Client for the three tournament calls.
///
/// Holds no state besides the key; Riot is the only source of truth for
/// providers, tournaments and codes.
#[derive(Debug, Clone)]
pub struct RiotTournamentClient {
    upstream: UpstreamClient,
    api_key: String,
    host_override: Option<String>,
}

impl RiotTournamentClient {
    pub fn new(upstream: UpstreamClient, api_key: String, host_override: Option<String>) -> Self {
        Self {
            upstream,
            api_key,
            host_override,
        }
    }

    /// Register a provider whose games report to `callback_url`.
    pub async fn register_provider(
        &self,
        region: Region,
        callback_url: &str,
    ) -> Result<ProviderId, UpstreamError> {
        let body = ProviderRegistration {
            region,
            url: callback_url.to_string(),
        };
        let url = self.endpoint_url(region, TournamentEndpoint::RegisterProvider);
        let provider_id = self.post(url, to_body(&body)?).await?;
        log::info!("Registered provider {} in {}", provider_id, region);
        Ok(provider_id)
    }

    /// Register a tournament under an existing provider.
    pub async fn register_tournament(
        &self,
        region: Region,
        name: &str,
        provider_id: ProviderId,
    ) -> Result<TournamentId, UpstreamError> {
        let body = TournamentRegistration {
            name: name.to_string(),
            provider_id,
        };
        let url = self.endpoint_url(region, TournamentEndpoint::RegisterTournament);
        let tournament_id = self.post(url, to_body(&body)?).await?;
        log::info!(
            "Registered tournament {} ({}) for provider {}",
            tournament_id,
            name,
            provider_id
        );
        Ok(tournament_id)
    }

    /// Create `count` codes for a tournament.
    pub async fn create_codes(
        &self,
        region: Region,
        tournament_id: TournamentId,
        count: CodeCount,
        settings: &TournamentCodeRequest,
    ) -> Result<Vec<String>, UpstreamError> {
        let url = format!(
            "{}?tournamentId={}&count={}",
            self.endpoint_url(region, TournamentEndpoint::CreateCodes),
            tournament_id,
            count.get()
        );
        let codes: Vec<String> = self.post(url, to_body(settings)?).await?;
        log::info!(
            "Created {} tournament codes for tournament {}",
            codes.len(),
            tournament_id
        );
        Ok(codes)
    }

    /// Host for `region`, or the override when one is configured
    pub fn host(&self, region: Region) -> &str {
        self.host_override
            .as_deref()
            .map(|h| h.trim_end_matches('/'))
            .unwrap_or_else(|| region.base_url())
    }

    fn endpoint_url(&self, region: Region, endpoint: TournamentEndpoint) -> String {
        format!("{}{}", self.host(region), endpoint.path())
    }

    async fn post<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
        body: Value,
    ) -> Result<T, UpstreamError> {
        let request = UpstreamRequest::post(url)
            .header(RIOT_TOKEN_HEADER, self.api_key.as_str())
            .json(body);
        self.upstream.send_json(request).await
    }
}

fn to_body<T: serde::Serialize>(payload: &T) -> Result<Value, UpstreamError> {
    serde_json::to_value(payload).map_err(|e| UpstreamError::Decode(e.to_string()))
}
