pub mod api;
pub mod models;

pub use api::{execute, fetch_roster, fetch_venue, resolve_team};
pub use models::{RosterPlayer, Team, Venue};
