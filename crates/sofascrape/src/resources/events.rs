//! Event endpoints

use super::{Resource, get};
use crate::{client::Client, error::Result, http::segment, response::ApiResponse};

/// Endpoints describing a single event (match).
///
/// # Example
///
/// ```rust,no_run
/// # use sofascrape::Client;
/// # async fn example(client: Client) -> sofascrape::Result<()> {
/// let incidents = client.events().incidents(11_352_380).await?;
/// incidents.select("incidents")?.save_csv("incidents.csv")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Events<'a> {
    client: &'a Client,
}

impl Resource for Events<'_> {
    fn client(&self) -> &Client {
        self.client
    }
}

impl<'a> Events<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Event details: teams, score, status, tournament, venue.
    pub async fn data(&self, event_id: u64) -> Result<ApiResponse> {
        get(self, "events_data", format!("/api/v1/event/{event_id}")).await
    }

    /// Goals, cards, substitutions and period markers.
    pub async fn incidents(&self, event_id: u64) -> Result<ApiResponse> {
        get(self, "events_incidents", format!("/api/v1/event/{event_id}/incidents")).await
    }

    /// Starting line-ups and substitutes for both teams.
    pub async fn lineups(&self, event_id: u64) -> Result<ApiResponse> {
        get(self, "events_lineups", format!("/api/v1/event/{event_id}/lineups")).await
    }

    /// Recent form of both teams before kick-off.
    pub async fn pregame_form(&self, event_id: u64) -> Result<ApiResponse> {
        get(self, "events_pregame_form", format!("/api/v1/event/{event_id}/pregame-form")).await
    }

    /// Head-to-head record of the two teams.
    pub async fn h2h(&self, event_id: u64) -> Result<ApiResponse> {
        get(self, "events_h2h", format!("/api/v1/event/{event_id}/h2h")).await
    }

    /// Managers of both teams.
    pub async fn managers(&self, event_id: u64) -> Result<ApiResponse> {
        get(self, "events_managers", format!("/api/v1/event/{event_id}/managers")).await
    }

    /// Video highlights.
    pub async fn highlights(&self, event_id: u64) -> Result<ApiResponse> {
        get(self, "events_highlights", format!("/api/v1/event/{event_id}/highlights")).await
    }

    /// Live commentary.
    pub async fn comments(&self, event_id: u64) -> Result<ApiResponse> {
        get(self, "events_comments", format!("/api/v1/event/{event_id}/comments")).await
    }

    /// Attack momentum graph.
    pub async fn graph(&self, event_id: u64) -> Result<ApiResponse> {
        get(self, "events_graph", format!("/api/v1/event/{event_id}/graph")).await
    }

    /// Win probability over the course of the match.
    pub async fn win_probability_graph(&self, event_id: u64) -> Result<ApiResponse> {
        get(
            self,
            "events_win_probability_graph",
            format!("/api/v1/event/{event_id}/graph/win-probability"),
        )
        .await
    }

    /// Fan votes (who will win).
    pub async fn votes(&self, event_id: u64) -> Result<ApiResponse> {
        get(self, "events_votes", format!("/api/v1/event/{event_id}/votes")).await
    }

    /// Average player positions.
    pub async fn average_positions(&self, event_id: u64) -> Result<ApiResponse> {
        get(
            self,
            "events_average_positions",
            format!("/api/v1/event/{event_id}/average-positions"),
        )
        .await
    }

    /// Event page metadata.
    pub async fn meta(&self, event_id: u64) -> Result<ApiResponse> {
        get(self, "events_meta", format!("/api/v1/event/{event_id}/meta")).await
    }

    /// Generated match insights in `language` (e.g. `en`).
    pub async fn ai_insights(&self, event_id: u64, language: &str) -> Result<ApiResponse> {
        let language = segment("language", language)?;
        get(
            self,
            "events_ai_insights",
            format!("/api/v1/event/{event_id}/ai-insights/{language}"),
        )
        .await
    }

    /// TV channels broadcasting the event, per country.
    pub async fn country_channels(&self, event_id: u64) -> Result<ApiResponse> {
        get(
            self,
            "events_country_channels",
            format!("/api/v1/tv/event/{event_id}/country-channels"),
        )
        .await
    }

    /// Votes on a TV channel's coverage of the event.
    pub async fn tv_channel_votes(&self, channel_id: u64, event_id: u64) -> Result<ApiResponse> {
        get(
            self,
            "events_tv_channel_votes",
            format!("/api/v1/tv/channel/{channel_id}/event/{event_id}/votes"),
        )
        .await
    }

    /// Short video stories available in a country.
    pub async fn video_stories(&self, event_id: u64, country_code: &str) -> Result<ApiResponse> {
        let country_code = segment("country_code", country_code)?;
        get(
            self,
            "events_video_stories",
            format!("/api/v1/event/{event_id}/video-stories/country/{country_code}"),
        )
        .await
    }

    /// Extended highlights available in a country.
    pub async fn extended_highlights(
        &self,
        event_id: u64,
        country_code: &str,
    ) -> Result<ApiResponse> {
        let country_code = segment("country_code", country_code)?;
        get(
            self,
            "events_extended_highlights",
            format!(
                "/api/v1/event/{event_id}/sport-video-highlights/country/{country_code}/extended"
            ),
        )
        .await
    }

    /// Events that were recently added to the schedule.
    pub async fn newly_added(&self) -> Result<ApiResponse> {
        get(self, "events_newly_added", "/api/v1/event/newly-added-events".to_string()).await
    }

    /// Fan rating ranking for a season.
    pub async fn fan_rating_ranking(&self, season_id: u64) -> Result<ApiResponse> {
        get(
            self,
            "events_fan_rating_ranking",
            format!("/api/v1/event/fan-rating/ranking/season/{season_id}"),
        )
        .await
    }
}
