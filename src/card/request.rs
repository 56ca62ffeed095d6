//! Card request parameters
//!
//! A card is requested with `?username=<handle>&theme=light|dark`. Requests
//! without a username are redirected to the project page instead of
//! rendering anything.

use crate::card::theme::Theme;
use crate::Result;
use url::Url;

/// Parameters of one card request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardRequest {
    pub username: Option<String>,
    pub theme: Option<Theme>,
}

/// What to do with a card request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    /// No username was given; send the client to `location`
    Redirect { location: String },

    /// Fetch `handle` and render its card
    Render { handle: String, theme: Theme },
}

impl CardRequest {
    pub fn new(username: Option<String>, theme: Option<Theme>) -> Self {
        Self { username, theme }
    }

    /// Reads `username` and `theme` from a query string
    ///
    /// The first occurrence of each parameter wins; unknown parameters are
    /// ignored.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut request = Self::default();

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "username" if request.username.is_none() => {
                    request.username = Some(value.into_owned());
                }
                "theme" if request.theme.is_none() => {
                    request.theme = Some(Theme::from_name(&value));
                }
                _ => {}
            }
        }

        request
    }

    /// Reads the request parameters from a full card URL
    pub fn from_url(url: &str) -> Result<Self> {
        let url = Url::parse(url)?;
        Ok(Self::from_query(url.query().unwrap_or("")))
    }

    /// Decides between redirecting and rendering
    ///
    /// # Arguments
    ///
    /// * `default_theme` - Theme used when the request names none
    /// * `redirect_url` - Location for requests without a username
    pub fn resolve(&self, default_theme: Theme, redirect_url: &str) -> CardAction {
        match self.username.as_deref() {
            Some(handle) if !handle.is_empty() => CardAction::Render {
                handle: handle.to_string(),
                theme: self.theme.unwrap_or(default_theme),
            },
            _ => CardAction::Redirect {
                location: redirect_url.to_string(),
            },
        }
    }
}
