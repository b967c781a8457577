use serde::{Deserialize, Serialize};

/// Envelope returned by both the id lookup and the season search endpoints.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TeamsResponse {
    #[serde(default)]
    pub teams: Vec<Team>,
}

/// One team record as returned by the Stats API. Identity is the id;
/// records are never mutated after decoding.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Team {
    pub id: i64,
    #[serde(default)]
    pub active: bool,
    pub name: String,
    #[serde(rename = "locationName", default)]
    pub location_name: String,
    #[serde(rename = "teamName", default)]
    pub team_name: String,
    pub venue: VenueRef,
}

/// Venue reference embedded in a team record; only the id is carried.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct VenueRef {
    pub id: i64,
}
