//! One-shot lookup orchestration: resolve, fan out, join, render

use chrono::{DateTime, Utc};
use futures::future::join;
use reqwest::Client;
use tracing::{error, info, instrument};

use crate::config::Config;
use crate::error::AppError;
use crate::report::render_roster_csv;

use super::roster_api::fetch_roster;
use super::team_api::resolve_team;
use super::venue_api::fetch_venue;

/// Literal body returned when a lookup cannot be satisfied.
pub const NOT_FOUND: &str = "Not Found";

/// Runs one complete lookup: team resolution first, then the roster and
/// venue fetches as two independent tasks joined before rendering.
///
/// Team resolution failure short-circuits to `"Not Found"` without touching
/// the other endpoints, and a venue that fails to resolve ends the same
/// way. A failed roster fetch instead degrades to a header-only report.
/// The two spawned fetches share no mutable state and run to their natural
/// completion; the only bound on a stalled upstream is the client timeout.
#[instrument(skip(client, config, reference_time))]
pub async fn execute(
    client: &Client,
    config: &Config,
    query: &str,
    reference_time: DateTime<Utc>,
) -> Result<String, AppError> {
    let Some(team) = resolve_team(client, config, query, reference_time).await else {
        return Ok(NOT_FOUND.to_string());
    };

    info!(
        "Resolved team {} (id {}), fetching roster and venue",
        team.name, team.id
    );

    let roster_task = tokio::spawn({
        let client = client.clone();
        let config = config.clone();
        let team_id = team.id;
        async move { fetch_roster(&client, &config, team_id).await }
    });
    let venue_task = tokio::spawn({
        let client = client.clone();
        let config = config.clone();
        let venue_id = team.venue.id;
        async move { fetch_venue(&client, &config, venue_id).await }
    });

    let (roster_result, venue_result) = join(roster_task, venue_task).await;

    // A task that died degrades the same way as a failed fetch
    let roster = roster_result.unwrap_or_else(|e| {
        error!("Roster task failed to complete: {e}");
        Vec::new()
    });
    let venue = venue_result.unwrap_or_else(|e| {
        error!("Venue task failed to complete: {e}");
        None
    });

    let Some(venue) = venue else {
        return Ok(NOT_FOUND.to_string());
    };

    render_roster_csv(&team, &roster, &venue)
}
