use crate::card::theme::{Palette, Theme};
use crate::profile::{ProfileKind, ProfileRecord};
use crate::{CardError, Result};
use serde::Serialize;

pub const FALLBACK_HEADLINE: &str = "Unable to load Telegram profile";
pub const FALLBACK_HINT: &str = "Please check the username and try again";

/// Presentation model of a card, ready for a renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub theme: Theme,
    pub palette: Palette,
    #[serde(flatten)]
    pub content: CardContent,
}

/// What the card shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CardContent {
    /// A successfully loaded profile
    Profile {
        kind: ProfileKind,
        title: String,
        /// `@handle`
        subtitle: String,
        description: Option<String>,
        avatar_url: String,
        extra: Option<String>,
    },

    /// Shown whenever the profile could not be loaded
    Unavailable { headline: String, hint: String },
}

impl CardView {
    /// Builds the card for a record
    ///
    /// Returns `IncompleteProfile` if the record lacks a title, avatar or
    /// handle.
    pub fn from_record(record: &ProfileRecord, theme: Theme) -> Result<Self> {
        validate_record(record)?;

        Ok(Self {
            theme,
            palette: theme.palette(),
            content: CardContent::Profile {
                kind: record.kind,
                title: record.title.clone().unwrap_or_default(),
                subtitle: format!("@{}", record.handle),
                description: record.description.clone(),
                avatar_url: record.avatar_url.clone(),
                extra: record.extra.clone(),
            },
        })
    }

    /// The generic error card
    ///
    /// Uses the fixed error palette regardless of the requested theme.
    pub fn fallback() -> Self {
        Self {
            theme: Theme::Light,
            palette: Palette::error(),
            content: CardContent::Unavailable {
                headline: FALLBACK_HEADLINE.to_string(),
                hint: FALLBACK_HINT.to_string(),
            },
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.content, CardContent::Unavailable { .. })
    }
}

/// Checks that a record has everything a card needs
///
/// Every missing field is reported, not just the first.
pub fn validate_record(record: &ProfileRecord) -> Result<()> {
    let mut missing = Vec::new();

    if record.title.as_deref().map_or(true, str::is_empty) {
        missing.push("title");
    }
    if record.avatar_url.is_empty() {
        missing.push("avatar");
    }
    if record.handle.is_empty() {
        missing.push("handle");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CardError::IncompleteProfile {
            handle: record.handle.clone(),
            missing,
        })
    }
}

/// Turns the outcome of a scrape into a card, falling back on any error
pub fn build_card(result: Result<ProfileRecord>, theme: Theme) -> CardView {
    match result.and_then(|record| CardView::from_record(&record, theme)) {
        Ok(view) => view,
        Err(e) => {
            tracing::error!("Error generating Telegram card: {}", e);
            CardView::fallback()
        }
    }
}
