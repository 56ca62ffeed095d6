//! Output handler traits and types

use crate::card::CardView;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to format output: {0}")]
    Format(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for card output handlers
///
/// A handler writes one card view in its own format.
pub trait CardOutput {
    /// Writes a card to `writer`
    ///
    /// # Arguments
    ///
    /// * `card` - The card to write
    /// * `writer` - Destination, usually stdout
    fn write_card(&self, card: &CardView, writer: &mut dyn Write) -> OutputResult<()>;
}
