use crate::profile::classifier::classify;
use crate::profile::document::ProfileDocument;
use crate::profile::extractor::extract_fields;
use crate::profile::record::ProfileRecord;

/// Builds a profile record from a parsed page
///
/// Classifies the page, extracts fields for that kind, and pairs them with
/// the caller's handle. Field completeness is not checked here; see
/// [`validate_record`](crate::card::validate_record).
pub fn assemble<D: ProfileDocument + ?Sized>(handle: &str, doc: &D) -> ProfileRecord {
    let kind = classify(doc);
    tracing::debug!(handle, %kind, "Classified profile page");

    let fields = extract_fields(doc, kind);

    ProfileRecord {
        kind,
        title: fields.title,
        handle: handle.to_string(),
        description: fields.description,
        avatar_url: fields.avatar_url,
        extra: fields.extra,
    }
}
