//! Field extraction from a classified profile page
//!
//! The stat lines (`div.tgme_page_extra`) carry no labels, so the extra
//! statistic is picked by position depending on the kind:
//!
//! | Kind | Extra |
//! |------|-------|
//! | Bot | second stat line (monthly users) |
//! | User | literal "User Account" |
//! | Channel, Group, Unknown | first stat line (subscribers / members) |

use crate::profile::document::{
    ProfileDocument, PAGE_DESCRIPTION, PAGE_EXTRA, PAGE_TITLE, PHOTO_IMAGE,
};
use crate::profile::kind::ProfileKind;

/// Label shown in place of a stat for personal accounts
pub const USER_ACCOUNT_LABEL: &str = "User Account";

/// Fields pulled from a profile page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedFields {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Empty when the page has no photo
    pub avatar_url: String,
    pub extra: Option<String>,
}

/// Extracts card fields from a profile page
///
/// Never fails: a missing element only makes its own field absent. Blank
/// text counts as absent.
pub fn extract_fields<D: ProfileDocument + ?Sized>(doc: &D, kind: ProfileKind) -> ExtractedFields {
    ExtractedFields {
        title: non_empty(doc.first_text(PAGE_TITLE)),
        description: non_empty(doc.first_text(PAGE_DESCRIPTION)),
        avatar_url: doc.first_attr(PHOTO_IMAGE, "src").unwrap_or_default(),
        extra: extract_extra(doc, kind),
    }
}

/// Selects the kind-dependent extra statistic
pub fn extract_extra<D: ProfileDocument + ?Sized>(doc: &D, kind: ProfileKind) -> Option<String> {
    let position = match kind {
        ProfileKind::User => return Some(USER_ACCOUNT_LABEL.to_string()),
        ProfileKind::Bot => 1,
        ProfileKind::Channel | ProfileKind::Group | ProfileKind::Unknown => 0,
    };

    non_empty(doc.all_text(PAGE_EXTRA).into_iter().nth(position))
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.is_empty())
}
