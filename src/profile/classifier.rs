//! Profile kind classification
//!
//! Priority order, first match wins:
//! 1. A non-empty context link means a channel, whatever the button says
//! 2. The lower-cased action button label: "start" → bot, "view" → group,
//!    "send" → user
//! 3. Anything else is unknown

use crate::profile::document::{ProfileDocument, ACTION_BUTTON, CONTEXT_LINK};
use crate::profile::kind::ProfileKind;

/// Classifies the entity a profile page describes
///
/// Pure function of the document; always returns a kind.
///
/// # Example
///
/// ```
/// use telegram_card::{classify, HtmlDocument, ProfileKind};
///
/// let doc = HtmlDocument::parse(
///     r#"<a class="tgme_action_button_new" href="tg://resolve">Start Bot</a>"#,
/// );
/// assert_eq!(classify(&doc), ProfileKind::Bot);
/// ```
pub fn classify<D: ProfileDocument + ?Sized>(doc: &D) -> ProfileKind {
    let has_context_link = doc
        .first_text(CONTEXT_LINK)
        .is_some_and(|text| !text.is_empty());

    if has_context_link {
        return ProfileKind::Channel;
    }

    match doc.first_text(ACTION_BUTTON) {
        Some(label) => kind_from_button_label(&label),
        None => ProfileKind::Unknown,
    }
}

/// Maps an action button label to a kind
fn kind_from_button_label(label: &str) -> ProfileKind {
    let label = label.to_lowercase();

    if label.contains("start") {
        ProfileKind::Bot
    } else if label.contains("view") {
        ProfileKind::Group
    } else if label.contains("send") {
        ProfileKind::User
    } else {
        ProfileKind::Unknown
    }
}
