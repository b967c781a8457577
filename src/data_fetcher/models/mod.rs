pub mod roster;
pub mod team;
pub mod venue;

// Re-export the wire types used across the fetch and report layers
pub use roster::{Person, Position, RosterPlayer, RosterResponse, RosterStatus};
pub use team::{Team, TeamsResponse, VenueRef};
pub use venue::{Venue, VenuesResponse};
