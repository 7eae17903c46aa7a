// =============================================================================
// extract/mod.rs — THE EXTRACTION FLOOR
// =============================================================================
//
// Everything that turns raw registry markup into structured fields lives
// here. Structural parts of the page (the select control, the operations
// list) go through a real HTML parser; the name and license fields live in
// tag soup and go through anchored patterns instead. Every extracted leaf
// value passes through the same normalizer on its way out.
// =============================================================================

pub mod details;
pub mod listing;
pub mod normalize;

pub use details::{extract_details, extract_license, extract_name, extract_operations};
pub use listing::extract_listing;
pub use normalize::strip_spare;
