use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// MLB Roster Lookup
///
/// Resolves a team by numeric id or free-text name search against the MLB
/// Stats API and prints the team's active roster as CSV: one row per player
/// with jersey number, name, position, and home stadium.
///
/// Prints "Not Found" when the query does not resolve to a team.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Team id or search query (e.g. "137" or "san fran"). Name queries
    /// match case-insensitively against the current season's team list;
    /// the first match wins.
    #[arg(short = 't', long = "team", value_name = "QUERY")]
    pub team: Option<String>,

    /// Update the API domain in config and exit.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "API_DOMAIN"
    )]
    pub new_api_domain: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Mirror logs to stderr in addition to the log file.
    /// Stdout stays reserved for the CSV output.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs are written to
    /// the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
