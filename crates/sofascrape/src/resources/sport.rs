//! Sport-wide listings

use super::{Resource, day, get, month};
use crate::{client::Client, error::Result, response::ApiResponse};
use chrono::NaiveDate;

/// Listings that span a whole sport: categories, schedules, live events.
///
/// Apart from [`event_count`](Self::event_count) and
/// [`calendar`](Self::calendar), these endpoints are football-only.
#[derive(Debug, Clone, Copy)]
pub struct Sport<'a> {
    client: &'a Client,
}

impl Resource for Sport<'_> {
    fn client(&self) -> &Client {
        self.client
    }
}

impl<'a> Sport<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// All football categories (countries and international competitions).
    pub async fn categories(&self) -> Result<ApiResponse> {
        get(self, "sport_categories", "/api/v1/sport/football/categories/all".to_string()).await
    }

    /// Number of live and total events for a sport.
    pub async fn event_count(&self, sport_id: u64) -> Result<ApiResponse> {
        get(self, "sport_event_count", format!("/api/v1/sport/{sport_id}/event-count")).await
    }

    /// Football events scheduled on `date`.
    ///
    /// The payload is `{"events": [...]}`; use
    /// [`ApiResponse::select`] to export the events as CSV.
    pub async fn scheduled_events(&self, date: NaiveDate) -> Result<ApiResponse> {
        get(
            self,
            "sport_scheduled_events",
            format!("/api/v1/sport/football/scheduled-events/{}", day(date)),
        )
        .await
    }

    /// Football events in progress.
    pub async fn live_events(&self) -> Result<ApiResponse> {
        get(self, "sport_live_events", "/api/v1/sport/football/events/live".to_string()).await
    }

    /// Odds from `provider_id` for all football events on `date`.
    pub async fn odds(&self, provider_id: u64, date: NaiveDate) -> Result<ApiResponse> {
        get(
            self,
            "sport_odds",
            format!("/api/v1/sport/football/odds/{provider_id}/{}", day(date)),
        )
        .await
    }

    /// Unique tournaments with events in the month containing `month_of`.
    pub async fn calendar(&self, month_of: NaiveDate, sport_id: u64) -> Result<ApiResponse> {
        get(
            self,
            "sport_calendar",
            format!(
                "/api/v1/calendar/{}/{sport_id}/football/unique-tournaments",
                month(month_of)
            ),
        )
        .await
    }

    /// Most compared football teams.
    pub async fn popular_team_comparisons(&self) -> Result<ApiResponse> {
        get(
            self,
            "sport_popular_team_comparisons",
            "/api/v1/popular-compare/football/team".to_string(),
        )
        .await
    }
}
