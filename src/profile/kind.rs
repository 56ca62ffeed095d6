//! Profile kind definitions
//!
//! Telegram's public pages carry no explicit type field, so the kind is
//! inferred by the classifier from the page's call-to-action markup.

use serde::Serialize;
use std::fmt;

/// The kind of entity a public profile page describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    /// Broadcast channel; the page shows a context link instead of a button
    Channel,

    /// Group chat ("View in Telegram")
    Group,

    /// Bot account ("Start Bot")
    Bot,

    /// Personal account ("Send Message")
    User,

    /// None of the known signals were found on the page
    Unknown,
}

impl ProfileKind {
    /// Returns the lowercase name used in logs and card output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Channel => "channel",
            Self::Group => "group",
            Self::Bot => "bot",
            Self::User => "user",
            Self::Unknown => "unknown",
        }
    }

}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
