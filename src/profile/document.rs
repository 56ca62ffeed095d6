//! Query capability over a parsed profile page
//!
//! The classifier and extractor only ever need three kinds of lookup, so they
//! depend on this trait instead of on a concrete HTML parser.

use std::fmt;

/// A tag + class pair identifying an element on a profile page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementSelector {
    pub tag: &'static str,
    pub class: &'static str,
}

impl ElementSelector {
    pub const fn new(tag: &'static str, class: &'static str) -> Self {
        Self { tag, class }
    }

    /// Returns the selector in CSS syntax, e.g. `div.tgme_page_title`
    pub fn to_css(&self) -> String {
        format!("{}.{}", self.tag, self.class)
    }
}

impl fmt::Display for ElementSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.tag, self.class)
    }
}

/// Link to the channel's message feed, only rendered on channel pages
pub const CONTEXT_LINK: ElementSelector = ElementSelector::new("a", "tgme_page_context_link");

/// Primary call-to-action button ("Send Message", "Start Bot", "View in Telegram")
pub const ACTION_BUTTON: ElementSelector = ElementSelector::new("a", "tgme_action_button_new");

pub const PAGE_TITLE: ElementSelector = ElementSelector::new("div", "tgme_page_title");

pub const PAGE_DESCRIPTION: ElementSelector =
    ElementSelector::new("div", "tgme_page_description");

/// Unlabelled stat lines (subscribers, members, monthly users)
pub const PAGE_EXTRA: ElementSelector = ElementSelector::new("div", "tgme_page_extra");

pub const PHOTO_IMAGE: ElementSelector = ElementSelector::new("img", "tgme_page_photo_image");

/// Read-only structural queries over a profile page
///
/// Text queries return the element's text content with surrounding
/// whitespace trimmed. A matched element with no text yields `Some("")`;
/// deciding whether that counts as absent is left to the caller.
pub trait ProfileDocument {
    /// Text of the first element matching `selector`
    fn first_text(&self, selector: ElementSelector) -> Option<String>;

    /// Value of attribute `attr` on the first element matching `selector`
    fn first_attr(&self, selector: ElementSelector, attr: &str) -> Option<String>;

    /// Text of every element matching `selector`, in document order
    fn all_text(&self, selector: ElementSelector) -> Vec<String>;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_css() {
        assert_eq!(PAGE_TITLE.to_css(), "div.tgme_page_title");
        assert_eq!(ACTION_BUTTON.to_css(), "a.tgme_action_button_new");
        assert_eq!(PHOTO_IMAGE.to_string(), "img.tgme_page_photo_image");
    }
}
