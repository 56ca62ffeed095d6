//! Profile page provider
//!
//! This module supplies the profile core with documents:
//! - HTTP fetching of `t.me/<handle>` pages
//! - Parsing responses into an [`HtmlDocument`]
//! - The end-to-end [`scrape_profile`] entry point

mod fetcher;
mod html;

pub use fetcher::{build_http_client, fetch_profile_page, profile_url};
pub use html::HtmlDocument;

use crate::profile::{assemble, ProfileRecord};
use crate::Result;
use reqwest::Client;

/// Fetches a profile page and assembles its record
///
/// Fetch failures propagate unchanged; no record is produced without a page.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `base_url` - Base URL the handle is appended to
/// * `handle` - Public handle, passed through as-is
pub async fn scrape_profile(client: &Client, base_url: &str, handle: &str) -> Result<ProfileRecord> {
    let body = fetch_profile_page(client, base_url, handle).await?;
    let document = HtmlDocument::parse(&body);
    Ok(assemble(handle, &document))
}
