use serde::{Deserialize, Serialize};

/// Envelope returned by the team roster endpoint.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RosterResponse {
    #[serde(default)]
    pub roster: Vec<RosterPlayer>,
}

/// One roster entry. Entries exist only inside a roster fetch and keep the
/// order the API returned them in.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RosterPlayer {
    pub person: Person,
    /// Jersey numbers come over the wire as strings and can be absent for
    /// players without an assigned number.
    #[serde(rename = "jerseyNumber", default)]
    pub jersey_number: String,
    pub position: Position,
    #[serde(default)]
    pub status: Option<RosterStatus>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Person {
    pub id: i64,
    #[serde(rename = "fullName")]
    pub full_name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Position {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub position_type: String,
    pub abbreviation: String,
}

/// Roster status (Active, Injured List, ...). Carried through but never
/// filtered on: all listed players appear in the output.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RosterStatus {
    #[serde(default)]
    pub description: String,
}
