//! `scraper`-backed profile document

use crate::profile::{ElementSelector, ProfileDocument};
use scraper::{ElementRef, Html, Selector};

/// A fetched profile page parsed into an HTML tree
#[derive(Debug)]
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parses a full HTML page
    ///
    /// Parsing is lenient: malformed markup still produces a document, it
    /// just may not contain the elements the extractor looks for.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    fn first_match(&self, selector: ElementSelector) -> Option<ElementRef<'_>> {
        let selector = css_selector(selector)?;
        // Bound so the `Select` temporary drops before `selector` does
        let first = self.html.select(&selector).next();
        first
    }
}

impl ProfileDocument for HtmlDocument {
    fn first_text(&self, selector: ElementSelector) -> Option<String> {
        self.first_match(selector).map(|e| element_text(&e))
    }

    fn first_attr(&self, selector: ElementSelector, attr: &str) -> Option<String> {
        self.first_match(selector)
            .and_then(|e| e.value().attr(attr))
            .map(str::to_string)
    }

    fn all_text(&self, selector: ElementSelector) -> Vec<String> {
        let Some(selector) = css_selector(selector) else {
            return Vec::new();
        };
        // Bound so the `Select` temporary drops before `selector` does
        let texts = self.html.select(&selector).map(|e| element_text(&e)).collect();
        texts
    }
}

fn css_selector(selector: ElementSelector) -> Option<Selector> {
    match Selector::parse(&selector.to_css()) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::warn!("Invalid selector {}: {:?}", selector, e);
            None
        }
    }
}

/// Concatenated text of an element and its descendants, trimmed
fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::document::{
        ACTION_BUTTON, CONTEXT_LINK, PAGE_DESCRIPTION, PAGE_EXTRA, PAGE_TITLE, PHOTO_IMAGE,
    };
    use crate::profile::{assemble, classify, extract_fields, ProfileKind};

    const CHANNEL_PAGE: &str = r#"
        <html>
        <body>
            <div class="tgme_page">
                <div class="tgme_page_photo">
                    <a href="https://t.me/s/acmenews">
                        <img class="tgme_page_photo_image" src="https://x/a.jpg">
                    </a>
                </div>
                <div class="tgme_page_title"><span dir="auto">Acme News</span></div>
                <div class="tgme_page_extra">1 234 subscribers</div>
                <div class="tgme_page_description">All the <b>news</b> that fits</div>
                <div class="tgme_page_action">
                    <a class="tgme_action_button_new" href="tg://resolve?domain=acmenews">View in Telegram</a>
                </div>
                <div class="tgme_page_context_link_wrap">
                    <a class="tgme_page_context_link" href="/s/acmenews">1,234 subscribers</a>
                </div>
            </div>
        </body>
        </html>
    "#;

    const BOT_PAGE: &str = r#"
        <html><body>
            <img class="tgme_page_photo_image" src="https://x/bot.jpg">
            <div class="tgme_page_title">Helper</div>
            <div class="tgme_page_extra">1.2K uses</div>
            <div class="tgme_page_extra">500 monthly users</div>
            <a class="tgme_action_button_new" href="tg://resolve?domain=helperbot">Start</a>
        </body></html>
    "#;

    const USER_PAGE: &str = r#"
        <html><body>
            <div class="tgme_page_title">Jane</div>
            <div class="tgme_page_extra">@jane</div>
            <a class="tgme_action_button_new" href="tg://resolve?domain=jane">Send Message</a>
        </body></html>
    "#;

    #[test]
    fn test_first_text_trims_and_flattens() {
        let doc = HtmlDocument::parse(CHANNEL_PAGE);
        assert_eq!(doc.first_text(PAGE_TITLE), Some("Acme News".to_string()));
        assert_eq!(
            doc.first_text(PAGE_DESCRIPTION),
            Some("All the news that fits".to_string())
        );
    }

    #[test]
    fn test_first_text_missing() {
        let doc = HtmlDocument::parse(USER_PAGE);
        assert_eq!(doc.first_text(CONTEXT_LINK), None);
    }

    #[test]
    fn test_first_attr() {
        let doc = HtmlDocument::parse(CHANNEL_PAGE);
        assert_eq!(
            doc.first_attr(PHOTO_IMAGE, "src"),
            Some("https://x/a.jpg".to_string())
        );
        assert_eq!(doc.first_attr(PHOTO_IMAGE, "alt"), None);
        assert_eq!(doc.first_attr(PAGE_EXTRA, "src"), None);
    }

    #[test]
    fn test_all_text_in_document_order() {
        let doc = HtmlDocument::parse(BOT_PAGE);
        assert_eq!(
            doc.all_text(PAGE_EXTRA),
            vec!["1.2K uses".to_string(), "500 monthly users".to_string()]
        );
    }

    #[test]
    fn test_class_match_is_exact() {
        // tgme_page_context_link_wrap must not match tgme_page_context_link
        let html = r#"<div class="tgme_page_context_link_wrap">wrap</div>"#;
        let doc = HtmlDocument::parse(html);
        assert_eq!(doc.first_text(CONTEXT_LINK), None);
    }

    #[test]
    fn test_classify_channel_page() {
        let doc = HtmlDocument::parse(CHANNEL_PAGE);
        assert_eq!(classify(&doc), ProfileKind::Channel);

        let fields = extract_fields(&doc, ProfileKind::Channel);
        assert_eq!(fields.title.as_deref(), Some("Acme News"));
        assert_eq!(fields.avatar_url, "https://x/a.jpg");
        assert_eq!(fields.extra.as_deref(), Some("1 234 subscribers"));
    }

    #[test]
    fn test_assemble_bot_page() {
        let doc = HtmlDocument::parse(BOT_PAGE);
        let record = assemble("helperbot", &doc);
        assert_eq!(record.kind, ProfileKind::Bot);
        assert_eq!(record.extra.as_deref(), Some("500 monthly users"));
        assert_eq!(record.avatar_url, "https://x/bot.jpg");
    }

    #[test]
    fn test_assemble_user_page() {
        let doc = HtmlDocument::parse(USER_PAGE);
        let record = assemble("jane", &doc);
        assert_eq!(record.kind, ProfileKind::User);
        assert_eq!(record.extra.as_deref(), Some("User Account"));
        assert_eq!(record.avatar_url, "");
        assert_eq!(doc.first_text(ACTION_BUTTON), Some("Send Message".to_string()));
    }

    #[test]
    fn test_empty_page() {
        let doc = HtmlDocument::parse("");
        let record = assemble("nobody", &doc);
        assert_eq!(record.kind, ProfileKind::Unknown);
        assert_eq!(record.title, None);
        assert_eq!(record.extra, None);
    }
}
