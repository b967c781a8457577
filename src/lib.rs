//! MLB Roster Lookup Library
//!
//! This library resolves an MLB team by numeric id or free-text name search
//! against the MLB Stats API, joins the team's active roster with its home
//! venue, and renders the result as CSV.
//!
//! # Examples
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use mlb_roster::config::Config;
//! use mlb_roster::data_fetcher::api::{create_http_client_with_timeout, execute};
//! use mlb_roster::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!
//!     // "137" resolves by id; "san fran" resolves by name search
//!     let csv = execute(&client, &config, "137", Utc::now()).await?;
//!     println!("{}", csv.trim());
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod report;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::{NOT_FOUND, execute};
pub use data_fetcher::models::{RosterPlayer, Team, Venue};
pub use error::AppError;
pub use report::render_roster_csv;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
