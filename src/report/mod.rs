//! Output for the generated license table.
//!
//! - [`csv`] — renders and writes the `Component,Origin,License,Copyright` document.
//! - [`terminal`] — progress and diagnostic lines for the console.

pub mod csv;
pub mod terminal;
