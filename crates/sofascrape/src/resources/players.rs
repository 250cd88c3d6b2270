//! Player endpoints

use super::{Resource, get};
use crate::{client::Client, error::Result, response::ApiResponse};

/// Player endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Players<'a> {
    client: &'a Client,
}

impl Resource for Players<'_> {
    fn client(&self) -> &Client {
        self.client
    }
}

impl<'a> Players<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Attribute overview (attacking, technical, tactical, ...) of a player.
    pub async fn attribute_overviews(&self, player_id: u64) -> Result<ApiResponse> {
        get(
            self,
            "players_attribute_overviews",
            format!("/api/v1/player/{player_id}/attribute-overviews"),
        )
        .await
    }

    /// Player statistic categories available for a tournament season.
    pub async fn statistics_types(
        &self,
        unique_tournament_id: u64,
        season_id: u64,
    ) -> Result<ApiResponse> {
        get(
            self,
            "players_statistics_types",
            format!(
                "/api/v1/unique-tournament/{unique_tournament_id}/season/{season_id}/player-statistics/types"
            ),
        )
        .await
    }

    /// Current standings of the player-of-the-season race.
    pub async fn season_race(
        &self,
        unique_tournament_id: u64,
        season_id: u64,
    ) -> Result<ApiResponse> {
        get(
            self,
            "players_season_race",
            format!(
                "/api/v1/unique-tournament/{unique_tournament_id}/season/{season_id}/player-of-the-season-race"
            ),
        )
        .await
    }
}
