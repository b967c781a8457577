//! URL building utilities for the Stats API endpoints

use crate::constants::MLB_SPORT_ID;

/// Builds the URL for an exact team lookup by id.
///
/// # Example
/// ```
/// use mlb_roster::data_fetcher::api::build_team_url;
///
/// let url = build_team_url("https://statsapi.mlb.com", 137);
/// assert_eq!(url, "https://statsapi.mlb.com/api/v1/teams/137");
/// ```
pub fn build_team_url(api_domain: &str, team_id: i64) -> String {
    format!("{api_domain}/api/v1/teams/{team_id}")
}

/// Builds the URL for the season team list used by the name search.
/// The list is scoped to one season and to MLB via the sport id.
///
/// # Example
/// ```
/// use mlb_roster::data_fetcher::api::build_team_search_url;
///
/// let url = build_team_search_url("https://statsapi.mlb.com", 2023);
/// assert_eq!(url, "https://statsapi.mlb.com/api/v1/teams?season=2023&sportIds=1");
/// ```
pub fn build_team_search_url(api_domain: &str, season: i32) -> String {
    format!("{api_domain}/api/v1/teams?season={season}&sportIds={MLB_SPORT_ID}")
}

/// Builds the URL for a team's active roster.
///
/// # Example
/// ```
/// use mlb_roster::data_fetcher::api::build_roster_url;
///
/// let url = build_roster_url("https://statsapi.mlb.com", 137);
/// assert_eq!(url, "https://statsapi.mlb.com/api/v1/teams/137/roster");
/// ```
pub fn build_roster_url(api_domain: &str, team_id: i64) -> String {
    format!("{api_domain}/api/v1/teams/{team_id}/roster")
}

/// Builds the URL for a venue lookup by id.
///
/// # Example
/// ```
/// use mlb_roster::data_fetcher::api::build_venue_url;
///
/// let url = build_venue_url("https://statsapi.mlb.com", 2395);
/// assert_eq!(url, "https://statsapi.mlb.com/api/v1/venues/2395");
/// ```
pub fn build_venue_url(api_domain: &str, venue_id: i64) -> String {
    format!("{api_domain}/api/v1/venues/{venue_id}")
}
