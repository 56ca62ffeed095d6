//! Telegram Card: preview cards for public Telegram profiles
//!
//! This crate fetches the public `t.me` page of a channel, group, bot or user,
//! classifies what kind of entity it describes, and extracts the fields a
//! preview card needs (title, description, avatar and a kind-dependent stat).

pub mod card;
pub mod config;
pub mod fetch;
pub mod output;
pub mod profile;

use thiserror::Error;

/// Main error type for Telegram Card operations
#[derive(Debug, Error)]
pub enum CardError {
    #[error("Failed to fetch profile page for @{handle}: HTTP {status}")]
    Fetch { handle: String, status: u16 },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("URL cannot carry a profile path: {0}")]
    InvalidUrl(String),

    #[error("Incomplete profile data for @{handle}: missing {}", .missing.join(", "))]
    IncompleteProfile {
        handle: String,
        missing: Vec<&'static str>,
    },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Telegram Card operations
pub type Result<T> = std::result::Result<T, CardError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use card::{build_card, validate_record, CardView, Theme};
pub use config::Config;
pub use fetch::{scrape_profile, HtmlDocument};
pub use profile::{assemble, classify, extract_fields, ProfileDocument, ProfileKind, ProfileRecord};
