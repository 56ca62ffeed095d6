//! Profile classification and extraction
//!
//! This module turns a parsed profile page into a [`ProfileRecord`]:
//! - Classifying the page into a [`ProfileKind`]
//! - Extracting title, description, avatar and the kind-dependent stat
//! - Assembling both into one record
//!
//! Everything here is synchronous and works against the [`ProfileDocument`]
//! trait, so it has no dependency on a particular HTML parser.

mod assembler;
mod classifier;
pub mod document;
mod extractor;
mod kind;
mod record;

pub use assembler::assemble;
pub use classifier::classify;
pub use document::{ElementSelector, ProfileDocument};
pub use extractor::{extract_extra, extract_fields, ExtractedFields, USER_ACCOUNT_LABEL};
pub use kind::ProfileKind;
pub use record::ProfileRecord;
