//! Application-wide constants and configuration values
//!
//! This module centralizes endpoint constants and magic numbers so the
//! fetch and config layers stay free of inline literals.

/// Default base URL for the MLB Stats API
pub const DEFAULT_API_DOMAIN: &str = "https://statsapi.mlb.com";

/// Sport id the Stats API assigns to Major League Baseball.
/// Scopes the season team search to the majors.
pub const MLB_SPORT_ID: u32 = 1;

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;
