use serde::{Deserialize, Serialize};

/// Envelope returned by the venue endpoint.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct VenuesResponse {
    #[serde(default)]
    pub venues: Vec<Venue>,
}

/// A physical stadium. Identity is the id.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub active: bool,
}
