//! API resource endpoints
//!
//! Endpoints are grouped by the entity they describe. Each group is a thin,
//! borrowed view over the [`Client`]; obtain one through the matching
//! accessor ([`Client::events`], [`Client::tournaments`], ...).
//!
//! Numeric identifiers are `u64`, page offsets `u32`, dates
//! [`chrono::NaiveDate`]. String segments (languages, country codes,
//! standings types) are validated before they are placed in a path.

pub mod events;
pub mod meta;
pub mod odds;
pub mod players;
pub mod sport;
pub mod teams;
pub mod tournaments;
pub mod venues;

pub use events::Events;
pub use meta::Meta;
pub use odds::Odds;
pub use players::Players;
pub use sport::Sport;
pub use teams::Teams;
pub use tournaments::Tournaments;
pub use venues::Venues;

use crate::{client::Client, error::Result, response::ApiResponse};
use chrono::NaiveDate;

/// Base trait for API resources.
pub trait Resource {
    /// Get a reference to the client.
    fn client(&self) -> &Client;
}

/// `YYYY-MM-DD`, as used by the scheduled-events and odds listings.
pub(crate) fn day(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `YYYY-MM`, as used by the calendar.
pub(crate) fn month(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// GET `path` through the resource's client and tag the response with
/// `endpoint`, the default file stem for [`ApiResponse::save_as_endpoint`].
pub(crate) async fn get<R: Resource + ?Sized>(
    resource: &R,
    endpoint: &'static str,
    path: String,
) -> Result<ApiResponse> {
    let response = resource.client().get(&path).await?;
    Ok(response.with_endpoint(endpoint))
}
