//! HTTP fetcher for public profile pages
//!
//! This module handles:
//! - Building the HTTP client with the configured user agent
//! - Building the profile URL for a handle
//! - GET requests and status classification
//!
//! There is deliberately no retry or timeout policy; a failed fetch is
//! reported once and the caller decides what to show.

use crate::config::FetchConfig;
use crate::{CardError, Result};
use reqwest::Client;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use telegram_card::config::FetchConfig;
/// use telegram_card::fetch::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Builds the public page URL for a handle
///
/// The handle is appended as a single path segment, so characters such as
/// `/` or `?` are percent-encoded instead of changing the target.
pub fn profile_url(base_url: &str, handle: &str) -> Result<Url> {
    let mut url = Url::parse(base_url)?;

    url.path_segments_mut()
        .map_err(|_| CardError::InvalidUrl(base_url.to_string()))?
        .pop_if_empty()
        .push(handle);

    Ok(url)
}

/// Fetches the raw HTML of a profile page
///
/// # Returns
///
/// * `Ok(String)` - Response body of a 2xx response
/// * `Err(CardError::Fetch)` - The server answered with a non-2xx status
/// * `Err(CardError::Http)` - The request could not be completed
pub async fn fetch_profile_page(client: &Client, base_url: &str, handle: &str) -> Result<String> {
    let url = profile_url(base_url, handle)?;
    tracing::debug!("Fetching profile page: {}", url);

    let response = client.get(url).send().await?;
    let status = response.status();

    if !status.is_success() {
        tracing::warn!("Profile page for @{} returned HTTP {}", handle, status);
        return Err(CardError::Fetch {
            handle: handle.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response.text().await?)
}
