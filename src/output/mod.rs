//! Output module for writing cards
//!
//! This module handles:
//! - Choosing an output format
//! - Writing card views as JSON or plain text

mod json;
mod text;
mod traits;

pub use json::JsonOutput;
pub use text::{format_text_card, TextOutput};
pub use traits::{CardOutput, OutputError, OutputResult};

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Card output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            other => Err(format!("unknown output format '{}' (expected json or text)", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Returns the output handler for a format
pub fn output_for(format: OutputFormat) -> Box<dyn CardOutput> {
    match format {
        OutputFormat::Json => Box::new(JsonOutput),
        OutputFormat::Text => Box::new(TextOutput),
    }
}
