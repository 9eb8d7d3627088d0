//! Copyright holder attribution.
//!
//! - [`copyright`] — pattern-based holder extraction from license texts.
//! - [`holder`] — name and repository based defaults when extraction finds nothing.

pub mod copyright;
pub mod holder;
