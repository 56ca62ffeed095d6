//! Card presentation plumbing
//!
//! This module sits between the profile core and whatever draws the image:
//! - Parsing card requests and deciding between redirect and render
//! - Themes and their colour palettes
//! - Validating that a record is complete enough to show
//! - Building the card view model, including the error fallback
//!
//! Pixel layout and image encoding are left to the renderer.

mod request;
mod theme;
mod view;

pub use request::{CardAction, CardRequest};
pub use theme::{Palette, Theme};
pub use view::{build_card, validate_record, CardContent, CardView, FALLBACK_HEADLINE, FALLBACK_HINT};
