//! Venue endpoints

use super::{Resource, get};
use crate::{client::Client, error::Result, response::ApiResponse};

/// Stadiums and the events played there.
///
/// Event listings are paged; `page` starts at 0.
#[derive(Debug, Clone, Copy)]
pub struct Venues<'a> {
    client: &'a Client,
}

impl Resource for Venues<'_> {
    fn client(&self) -> &Client {
        self.client
    }
}

impl<'a> Venues<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Venue details: name, city, capacity.
    pub async fn data(&self, venue_id: u64) -> Result<ApiResponse> {
        get(self, "venues_data", format!("/api/v1/venue/{venue_id}")).await
    }

    /// Upcoming events at nearby venues.
    pub async fn near_events(&self, venue_id: u64) -> Result<ApiResponse> {
        get(self, "venues_near_events", format!("/api/v1/venue/{venue_id}/near-events")).await
    }

    /// Upcoming events at the venue.
    pub async fn next_events(&self, venue_id: u64, page: u32) -> Result<ApiResponse> {
        get(
            self,
            "venues_next_events",
            format!("/api/v1/venue/{venue_id}/events/all/next/{page}"),
        )
        .await
    }

    /// Past events at the venue.
    pub async fn last_events(&self, venue_id: u64, page: u32) -> Result<ApiResponse> {
        get(
            self,
            "venues_last_events",
            format!("/api/v1/venue/{venue_id}/events/all/last/{page}"),
        )
        .await
    }
}
