//! Team endpoints

use super::{Resource, get};
use crate::{client::Client, error::Result, response::ApiResponse};

/// Team endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Teams<'a> {
    client: &'a Client,
}

impl Resource for Teams<'_> {
    fn client(&self) -> &Client {
        self.client
    }
}

impl<'a> Teams<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Team details.
    pub async fn data(&self, team_id: u64) -> Result<ApiResponse> {
        get(self, "teams_data", format!("/api/v1/team/{team_id}")).await
    }

    /// Featured players of the team.
    pub async fn featured_players(&self, team_id: u64) -> Result<ApiResponse> {
        get(
            self,
            "teams_featured_players",
            format!("/api/v1/team/{team_id}/featured-players"),
        )
        .await
    }

    /// Tournaments and seasons for which team statistics exist.
    pub async fn statistics_seasons(&self, team_id: u64) -> Result<ApiResponse> {
        get(
            self,
            "teams_statistics_seasons",
            format!("/api/v1/team/{team_id}/team-statistics/seasons"),
        )
        .await
    }

    /// Overall team statistics in one tournament season.
    pub async fn tournament_statistics(
        &self,
        team_id: u64,
        unique_tournament_id: u64,
        season_id: u64,
    ) -> Result<ApiResponse> {
        get(
            self,
            "teams_tournament_statistics",
            format!(
                "/api/v1/team/{team_id}/unique-tournament/{unique_tournament_id}/season/{season_id}/statistics/overall"
            ),
        )
        .await
    }

    /// Round-by-round performance graph data.
    pub async fn performance_graph(
        &self,
        unique_tournament_id: u64,
        season_id: u64,
        team_id: u64,
    ) -> Result<ApiResponse> {
        get(
            self,
            "teams_performance_graph",
            format!(
                "/api/v1/unique-tournament/{unique_tournament_id}/season/{season_id}/team/{team_id}/team-performance-graph-data"
            ),
        )
        .await
    }

    /// Goals scored and conceded by match period.
    pub async fn goal_distributions(
        &self,
        unique_tournament_id: u64,
        season_id: u64,
        team_id: u64,
    ) -> Result<ApiResponse> {
        get(
            self,
            "teams_goal_distributions",
            format!(
                "/api/v1/unique-tournament/{unique_tournament_id}/season/{season_id}/team/{team_id}/goal-distributions"
            ),
        )
        .await
    }

    /// Team statistic categories available for a tournament season.
    pub async fn statistics_types(
        &self,
        unique_tournament_id: u64,
        season_id: u64,
    ) -> Result<ApiResponse> {
        get(
            self,
            "teams_statistics_types",
            format!(
                "/api/v1/unique-tournament/{unique_tournament_id}/season/{season_id}/team-statistics/types"
            ),
        )
        .await
    }
}
