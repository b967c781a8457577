pub mod http_client;
pub mod urls;

mod fetch_utils;
mod orchestrator;
mod roster_api;
mod team_api;
mod venue_api;

// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
// Re-export URL builders
pub use urls::{build_roster_url, build_team_search_url, build_team_url, build_venue_url};
// Re-export the lookup operations
pub use orchestrator::{NOT_FOUND, execute};
pub use roster_api::fetch_roster;
pub use team_api::resolve_team;
pub use venue_api::fetch_venue;
