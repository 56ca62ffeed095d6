//! Configuration module for Telegram Card
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section is optional; missing keys fall back to the public t.me defaults.
//!
//! # Example
//!
//! ```no_run
//! use telegram_card::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("telegram-card.toml")).unwrap();
//! println!("Default theme: {}", config.card.theme);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    CardConfig, Config, FetchConfig, OutputConfig, DEFAULT_BASE_URL, DEFAULT_REDIRECT_URL,
    DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default, parse_config};
