//! Full provider → tournament → codes sequence for one region.

use super::client::RiotTournamentClient;
use super::config::Region;
use super::errors::SetupError;
use super::models::{CodeCount, ProviderId, TournamentCodeRequest, TournamentId};

/// Result of a completed setup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupSummary {
    pub provider_id: ProviderId,
    pub tournament_id: TournamentId,
    pub codes: Vec<String>,
    pub callback_url: String,
}

/// Runs the three registration calls in order.
///
/// Each step uses the identifier returned by the previous one. The first
/// failure aborts the sequence; nothing already registered is rolled back.
pub struct TournamentSetup<'a> {
    client: &'a RiotTournamentClient,
    region: Region,
}

impl<'a> TournamentSetup<'a> {
    pub fn new(client: &'a RiotTournamentClient, region: Region) -> Self {
        Self { client, region }
    }

    pub async fn run(
        &self,
        callback_url: &str,
        tournament_name: &str,
        count: CodeCount,
        settings: &TournamentCodeRequest,
    ) -> Result<SetupSummary, SetupError> {
        log::info!("Starting tournament setup in {}", self.region);

        let provider_id = self
            .client
            .register_provider(self.region, callback_url)
            .await
            .map_err(SetupError::Provider)?;

        let tournament_id = self
            .client
            .register_tournament(self.region, tournament_name, provider_id)
            .await
            .map_err(SetupError::Tournament)?;

        let codes = self
            .client
            .create_codes(self.region, tournament_id, count, settings)
            .await
            .map_err(SetupError::Codes)?;

        log::info!(
            "Tournament setup complete: provider {}, tournament {}, {} codes",
            provider_id,
            tournament_id,
            codes.len()
        );

        Ok(SetupSummary {
            provider_id,
            tournament_id,
            codes,
            callback_url: callback_url.to_string(),
        })
    }
}
