//! Betting odds endpoints

use super::{Resource, get};
use crate::{client::Client, error::Result, http::segment, response::ApiResponse};

/// Betting odds for events, by provider.
///
/// Provider IDs come from [`providers`](Self::providers); `1` is the
/// default provider on the website.
#[derive(Debug, Clone, Copy)]
pub struct Odds<'a> {
    client: &'a Client,
}

impl Resource for Odds<'_> {
    fn client(&self) -> &Client {
        self.client
    }
}

impl<'a> Odds<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Main markets for an event.
    pub async fn featured(&self, event_id: u64, provider_id: u64) -> Result<ApiResponse> {
        get(
            self,
            "odds_featured",
            format!("/api/v1/event/{event_id}/odds/{provider_id}/featured"),
        )
        .await
    }

    /// Every market for an event.
    pub async fn all(&self, event_id: u64, provider_id: u64) -> Result<ApiResponse> {
        get(self, "odds_all", format!("/api/v1/event/{event_id}/odds/{provider_id}/all")).await
    }

    /// How often the favourite won at similar odds.
    pub async fn winning(&self, event_id: u64, provider_id: u64) -> Result<ApiResponse> {
        get(
            self,
            "odds_winning",
            format!("/api/v1/event/{event_id}/provider/{provider_id}/winning-odds"),
        )
        .await
    }

    /// Team streaks with the matching betting odds.
    pub async fn team_streaks(&self, event_id: u64, provider_id: u64) -> Result<ApiResponse> {
        get(
            self,
            "odds_team_streaks",
            format!("/api/v1/event/{event_id}/team-streaks/betting-odds/{provider_id}"),
        )
        .await
    }

    /// Odds providers available in a country (ISO alpha-2, e.g. `GB`).
    pub async fn providers(&self, country_code: &str) -> Result<ApiResponse> {
        let country_code = segment("country_code", country_code)?;
        get(self, "odds_providers", format!("/api/v1/odds/providers/{country_code}/web")).await
    }
}
