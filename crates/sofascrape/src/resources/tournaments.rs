//! Unique-tournament and season endpoints

use super::{Resource, get};
use crate::{client::Client, error::Result, http::segment, response::ApiResponse};

/// Competitions ("unique tournaments") and their seasons.
///
/// A unique tournament is a competition across years (Premier League = 17);
/// a season is one edition of it. Most endpoints need both IDs, which can be
/// found with [`seasons`](Self::seasons).
///
/// # Example
///
/// ```rust,no_run
/// # use sofascrape::Client;
/// # async fn example(client: Client) -> sofascrape::Result<()> {
/// let tournaments = client.tournaments();
/// let standings = tournaments.standings(17, 61627, "total").await?;
/// let table = standings.pointer("/standings/0/rows").cloned();
/// # let _ = table;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Tournaments<'a> {
    client: &'a Client,
}

impl Resource for Tournaments<'_> {
    fn client(&self) -> &Client {
        self.client
    }
}

fn season_path(unique_tournament_id: u64, season_id: u64, rest: &str) -> String {
    format!("/api/v1/unique-tournament/{unique_tournament_id}/season/{season_id}/{rest}")
}

impl<'a> Tournaments<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Tournament details.
    pub async fn data(&self, unique_tournament_id: u64) -> Result<ApiResponse> {
        get(
            self,
            "tournaments_data",
            format!("/api/v1/unique-tournament/{unique_tournament_id}"),
        )
        .await
    }

    /// All seasons of the tournament, newest first.
    pub async fn seasons(&self, unique_tournament_id: u64) -> Result<ApiResponse> {
        get(
            self,
            "tournaments_seasons",
            format!("/api/v1/unique-tournament/{unique_tournament_id}/seasons"),
        )
        .await
    }

    /// Tournament page metadata.
    pub async fn meta(&self, unique_tournament_id: u64) -> Result<ApiResponse> {
        get(
            self,
            "tournaments_meta",
            format!("/api/v1/unique-tournament/{unique_tournament_id}/meta"),
        )
        .await
    }

    /// Featured upcoming events.
    pub async fn featured_events(&self, unique_tournament_id: u64) -> Result<ApiResponse> {
        get(
            self,
            "tournaments_featured_events",
            format!("/api/v1/unique-tournament/{unique_tournament_id}/featured-events"),
        )
        .await
    }

    /// News and video media.
    pub async fn media(&self, unique_tournament_id: u64) -> Result<ApiResponse> {
        get(
            self,
            "tournaments_media",
            format!("/api/v1/unique-tournament/{unique_tournament_id}/media"),
        )
        .await
    }

    /// Season summary: goals, cards, winners.
    pub async fn season_info(&self, unique_tournament_id: u64, season_id: u64) -> Result<ApiResponse> {
        get(
            self,
            "tournaments_season_info",
            season_path(unique_tournament_id, season_id, "info"),
        )
        .await
    }

    /// League table. `standings_type` is `total`, `home` or `away`.
    pub async fn standings(
        &self,
        unique_tournament_id: u64,
        season_id: u64,
        standings_type: &str,
    ) -> Result<ApiResponse> {
        let standings_type = segment("standings_type", standings_type)?;
        get(
            self,
            "tournaments_standings",
            season_path(
                unique_tournament_id,
                season_id,
                &format!("standings/{standings_type}"),
            ),
        )
        .await
    }

    /// League table addressed by the legacy tournament ID (not the unique one).
    pub async fn legacy_standings(&self, tournament_id: u64, season_id: u64) -> Result<ApiResponse> {
        get(
            self,
            "tournaments_legacy_standings",
            format!("/api/v1/tournament/{tournament_id}/season/{season_id}/standings/total"),
        )
        .await
    }

    /// Past events, most recent first. `page` starts at 0.
    pub async fn last_events(
        &self,
        unique_tournament_id: u64,
        season_id: u64,
        page: u32,
    ) -> Result<ApiResponse> {
        get(
            self,
            "tournaments_last_events",
            season_path(unique_tournament_id, season_id, &format!("events/last/{page}")),
        )
        .await
    }

    /// Upcoming events, soonest first. `page` starts at 0.
    pub async fn next_events(
        &self,
        unique_tournament_id: u64,
        season_id: u64,
        page: u32,
    ) -> Result<ApiResponse> {
        get(
            self,
            "tournaments_next_events",
            season_path(unique_tournament_id, season_id, &format!("events/next/{page}")),
        )
        .await
    }

    /// Events of one round (matchday).
    pub async fn events_by_round(
        &self,
        unique_tournament_id: u64,
        season_id: u64,
        round: u32,
    ) -> Result<ApiResponse> {
        get(
            self,
            "tournaments_events_by_round",
            season_path(unique_tournament_id, season_id, &format!("events/round/{round}")),
        )
        .await
    }

    /// Events of each team, grouped. `kind` is `total`, `home` or `away`.
    pub async fn team_events(
        &self,
        unique_tournament_id: u64,
        season_id: u64,
        kind: &str,
    ) -> Result<ApiResponse> {
        let kind = segment("kind", kind)?;
        get(
            self,
            "tournaments_team_events",
            season_path(unique_tournament_id, season_id, &format!("team-events/{kind}")),
        )
        .await
    }

    /// Rounds of the season and the current round.
    pub async fn rounds(&self, unique_tournament_id: u64, season_id: u64) -> Result<ApiResponse> {
        get(
            self,
            "tournaments_rounds",
            season_path(unique_tournament_id, season_id, "rounds"),
        )
        .await
    }

    /// Groups of a group-stage competition.
    pub async fn groups(&self, unique_tournament_id: u64, season_id: u64) -> Result<ApiResponse> {
        get(
            self,
            "tournaments_groups",
            season_path(unique_tournament_id, season_id, "groups"),
        )
        .await
    }

    /// Divisions of a multi-level competition.
    pub async fn divisions(&self, unique_tournament_id: u64, season_id: u64) -> Result<ApiResponse> {
        get(
            self,
            "tournaments_divisions",
            season_path(unique_tournament_id, season_id, "divisions"),
        )
        .await
    }

    /// Venues used during the season.
    pub async fn venues(&self, unique_tournament_id: u64, season_id: u64) -> Result<ApiResponse> {
        get(
            self,
            "tournaments_venues",
            season_path(unique_tournament_id, season_id, "venues"),
        )
        .await
    }

    /// Editors' picks for the season.
    pub async fn editors(&self, unique_tournament_id: u64, season_id: u64) -> Result<ApiResponse> {
        get(
            self,
            "tournaments_editors",
            season_path(unique_tournament_id, season_id, "editors"),
        )
        .await
    }

    /// Knockout brackets.
    pub async fn cup_trees(&self, unique_tournament_id: u64, season_id: u64) -> Result<ApiResponse> {
        get(
            self,
            "tournaments_cup_trees",
            season_path(unique_tournament_id, season_id, "cuptrees"),
        )
        .await
    }

    /// Best players of the season per statistic.
    pub async fn top_players(&self, unique_tournament_id: u64, season_id: u64) -> Result<ApiResponse> {
        get(
            self,
            "tournaments_top_players",
            season_path(unique_tournament_id, season_id, "top-players/overall"),
        )
        .await
    }

    /// Best players of the season per statistic, averaged per game.
    pub async fn top_players_per_game(
        &self,
        unique_tournament_id: u64,
        season_id: u64,
    ) -> Result<ApiResponse> {
        get(
            self,
            "tournaments_top_players_per_game",
            season_path(
                unique_tournament_id,
                season_id,
                "top-players-per-game/all/overall",
            ),
        )
        .await
    }

    /// Best teams of the season per statistic.
    pub async fn top_teams(&self, unique_tournament_id: u64, season_id: u64) -> Result<ApiResponse> {
        get(
            self,
            "tournaments_top_teams",
            season_path(unique_tournament_id, season_id, "top-teams/overall"),
        )
        .await
    }

    /// Rounds for which a team of the week exists.
    pub async fn team_of_the_week_rounds(
        &self,
        unique_tournament_id: u64,
        season_id: u64,
    ) -> Result<ApiResponse> {
        get(
            self,
            "tournaments_team_of_the_week_rounds",
            season_path(unique_tournament_id, season_id, "team-of-the-week/rounds"),
        )
        .await
    }

    /// Team of the week for one round; `round_id` comes from
    /// [`team_of_the_week_rounds`](Self::team_of_the_week_rounds).
    pub async fn team_of_the_week(
        &self,
        unique_tournament_id: u64,
        season_id: u64,
        round_id: u64,
    ) -> Result<ApiResponse> {
        get(
            self,
            "tournaments_team_of_the_week",
            season_path(
                unique_tournament_id,
                season_id,
                &format!("team-of-the-week/{round_id}"),
            ),
        )
        .await
    }

    /// Player of the season.
    pub async fn player_of_the_season(
        &self,
        unique_tournament_id: u64,
        season_id: u64,
    ) -> Result<ApiResponse> {
        get(
            self,
            "tournaments_player_of_the_season",
            season_path(unique_tournament_id, season_id, "player-of-the-season"),
        )
        .await
    }

    /// Rounds with power rankings.
    pub async fn power_rankings_rounds(
        &self,
        unique_tournament_id: u64,
        season_id: u64,
    ) -> Result<ApiResponse> {
        get(
            self,
            "tournaments_power_rankings_rounds",
            season_path(unique_tournament_id, season_id, "power-rankings/rounds"),
        )
        .await
    }

    /// Rounds with video highlights available in a country.
    pub async fn video_highlight_rounds(
        &self,
        country_code: &str,
        unique_tournament_id: u64,
        season_id: u64,
    ) -> Result<ApiResponse> {
        let country_code = segment("country_code", country_code)?;
        get(
            self,
            "tournaments_video_highlight_rounds",
            format!(
                "/api/v1/sport-video-highlights/country/{country_code}/unique-tournament/{unique_tournament_id}/season/{season_id}/rounds"
            ),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_path() {
        assert_eq!(
            season_path(17, 61627, "cuptrees"),
            "/api/v1/unique-tournament/17/season/61627/cuptrees"
        );
    }
}
