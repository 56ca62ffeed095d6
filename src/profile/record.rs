use crate::profile::kind::ProfileKind;
use serde::Serialize;

/// Everything a preview card needs to know about one profile
///
/// Built once per request by [`assemble`](crate::profile::assemble) and never
/// mutated afterwards. `extra` must be read together with `kind`: it is a
/// subscriber or member count for channels and groups, monthly users for
/// bots, and the fixed label "User Account" for users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileRecord {
    pub kind: ProfileKind,
    pub title: Option<String>,
    /// The handle the caller asked for, not re-read from the page
    pub handle: String,
    pub description: Option<String>,
    /// Empty when the page has no photo
    pub avatar_url: String,
    pub extra: Option<String>,
}
