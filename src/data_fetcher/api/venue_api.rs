//! Venue endpoint specialization

use reqwest::Client;
use tracing::{instrument, warn};

use crate::config::Config;
use crate::data_fetcher::models::{Venue, VenuesResponse};

use super::fetch_utils::fetch;
use super::urls::build_venue_url;

/// Fetches a venue by id. Requires exactly one venue in the response
/// envelope; any deviation (zero or multiple results, error, bad status)
/// yields `None` with the cause logged.
#[instrument(skip(client, config))]
pub async fn fetch_venue(client: &Client, config: &Config, venue_id: i64) -> Option<Venue> {
    let url = build_venue_url(&config.api_domain, venue_id);

    let response = match fetch::<VenuesResponse>(client, &url).await {
        Ok(response) => response,
        Err(e) => {
            warn!("Venue fetch failed for id {}: {}", venue_id, e);
            return None;
        }
    };

    if response.venues.len() != 1 {
        warn!(
            "Could not find venue with id {}: expected one result, got {}",
            venue_id,
            response.venues.len()
        );
        return None;
    }

    response.venues.into_iter().next()
}
