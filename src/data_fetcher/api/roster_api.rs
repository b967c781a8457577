//! Roster endpoint specialization

use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::Config;
use crate::data_fetcher::models::{RosterPlayer, RosterResponse};

use super::fetch_utils::fetch;
use super::urls::build_roster_url;

/// Fetches a team's active roster. Never absent: any failure (transport,
/// status, decode) degrades to an empty roster so the report renders with
/// zero data rows instead of failing the whole lookup.
#[instrument(skip(client, config))]
pub async fn fetch_roster(client: &Client, config: &Config, team_id: i64) -> Vec<RosterPlayer> {
    let url = build_roster_url(&config.api_domain, team_id);

    match fetch::<RosterResponse>(client, &url).await {
        Ok(response) => {
            debug!(
                "Fetched {} roster entries for team {}",
                response.roster.len(),
                team_id
            );
            response.roster
        }
        Err(e) => {
            warn!(
                "Roster fetch failed for team {}: {} - continuing with empty roster",
                team_id, e
            );
            Vec::new()
        }
    }
}
