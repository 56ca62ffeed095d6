use crate::card::Theme;
use crate::output::OutputFormat;
use serde::Deserialize;

/// Public profile pages live at `https://t.me/<handle>`
pub const DEFAULT_BASE_URL: &str = "https://t.me/";

/// Desktop browser identity; t.me serves the full preview markup to browsers
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Where requests without a username are sent
pub const DEFAULT_REDIRECT_URL: &str = "https://github.com/Malith-Rukshan/telegram-card";

/// Main configuration structure for Telegram Card
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub card: CardConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Profile page fetching configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Base URL the handle is appended to
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

/// Card presentation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CardConfig {
    /// Theme used when the request doesn't name one
    #[serde(default)]
    pub theme: Theme,

    /// Location returned for requests without a username
    #[serde(rename = "redirect-url", default = "default_redirect_url")]
    pub redirect_url: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            redirect_url: default_redirect_url(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_redirect_url() -> String {
    DEFAULT_REDIRECT_URL.to_string()
}
