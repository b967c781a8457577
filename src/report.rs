//! CSV rendering of a joined (team, roster, venue) lookup result

use csv::WriterBuilder;

use crate::data_fetcher::models::{RosterPlayer, Team, Venue};
use crate::error::AppError;

/// Column headers, in output order.
const HEADER: [&str; 5] = ["Team", "Jersey", "Name", "Position", "Home Stadium"];

/// Renders the roster as RFC-4180 CSV with the fixed five-column header.
/// Rows keep the roster's input order; players are not sorted,
/// deduplicated, or filtered by status. An empty roster yields the header
/// row alone.
pub fn render_roster_csv(
    team: &Team,
    roster: &[RosterPlayer],
    venue: &Venue,
) -> Result<String, AppError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    writer
        .write_record(HEADER)
        .map_err(|e| AppError::csv_output_error(e.to_string()))?;

    for player in roster {
        writer
            .write_record([
                team.name.as_str(),
                player.jersey_number.as_str(),
                player.person.full_name.as_str(),
                player.position.abbreviation.as_str(),
                venue.name.as_str(),
            ])
            .map_err(|e| AppError::csv_output_error(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::csv_output_error(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::csv_output_error(e.to_string()))
}
