//! Team resolution: exact id lookup or season-scoped name search

use chrono::{DateTime, Datelike, Utc};
use reqwest::Client;
use tracing::{info, instrument, warn};

use crate::config::Config;
use crate::data_fetcher::models::{Team, TeamsResponse};

use super::fetch_utils::fetch;
use super::urls::{build_team_search_url, build_team_url};

/// Resolves a user-supplied query to a single team.
///
/// A query that parses as an integer is treated as a team id; anything else
/// is matched against the reference season's team list by case-insensitive
/// substring, first match winning in API order. Every failure mode
/// (transport, status, decode, wrong result count) collapses to `None`
/// here; the cause is logged and never surfaced to the caller.
///
/// `reference_time` selects the search season, so resolution is
/// deterministic under test.
#[instrument(skip(client, config, reference_time))]
pub async fn resolve_team(
    client: &Client,
    config: &Config,
    query: &str,
    reference_time: DateTime<Utc>,
) -> Option<Team> {
    match query.parse::<i64>() {
        Ok(team_id) => fetch_team_by_id(client, config, team_id).await,
        Err(_) => fetch_team_by_name(client, config, query, reference_time).await,
    }
}

/// Exact lookup via `/api/v1/teams/{id}`. The endpoint answers with the
/// usual list envelope; anything other than exactly one team is a miss.
async fn fetch_team_by_id(client: &Client, config: &Config, team_id: i64) -> Option<Team> {
    let url = build_team_url(&config.api_domain, team_id);

    let response = match fetch::<TeamsResponse>(client, &url).await {
        Ok(response) => response,
        Err(e) => {
            warn!("Team lookup failed for id {}: {}", team_id, e);
            return None;
        }
    };

    if response.teams.len() != 1 {
        warn!(
            "Could not find team with id {}: expected one result, got {}",
            team_id,
            response.teams.len()
        );
        return None;
    }

    response.teams.into_iter().next()
}

/// Name search over the season team list. The season is the calendar year
/// of the reference time; matching is a case-insensitive substring scan in
/// the order the API returned the teams.
async fn fetch_team_by_name(
    client: &Client,
    config: &Config,
    name: &str,
    reference_time: DateTime<Utc>,
) -> Option<Team> {
    let season = reference_time.year();
    let url = build_team_search_url(&config.api_domain, season);

    let response = match fetch::<TeamsResponse>(client, &url).await {
        Ok(response) => response,
        Err(e) => {
            warn!("Team search failed for \"{}\": {}", name, e);
            return None;
        }
    };

    let needle = name.to_lowercase();
    let team = response
        .teams
        .into_iter()
        .find(|team| team.name.to_lowercase().contains(&needle));

    match &team {
        Some(team) => info!("Resolved \"{}\" to {} (id {})", name, team.name, team.id),
        None => warn!("Could not find team with name \"{}\" in season {}", name, season),
    }

    team
}
