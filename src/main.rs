//! `license-csv` — flatten a third-party license manifest into a CSV of components.
//!
//! # Flow
//! 1. Check that the manifest exists (exit `1` with a hint when it does not).
//! 2. Load extraction rules ([`config::load_config`]).
//! 3. Parse the manifest into package records ([`manifest::load_manifest`]).
//! 4. Attribute a copyright holder and keep one row per component ([`aggregate`]).
//! 5. Sort and write the CSV ([`report::csv`]).

mod aggregate;
mod config;
mod error;
mod license;
mod manifest;
mod models;
mod report;

use std::path::Path;

use anyhow::Result;

use aggregate::aggregate;
use config::{load_config, Config, Paths};
use license::copyright::CopyrightExtractor;
use manifest::load_manifest;
use report::terminal;

fn main() -> Result<()> {
    let paths = Paths::default();

    if !paths.manifest.exists() {
        terminal::missing_manifest(&paths.manifest);
        std::process::exit(1);
    }

    let config = load_config(Path::new("."))?;

    generate(&paths, &config)?;

    Ok(())
}

/// Run the whole pipeline for `paths`; returns the number of rows written.
fn generate(paths: &Paths, config: &Config) -> Result<usize> {
    terminal::reading(&paths.manifest);
    let records = load_manifest(&paths.manifest)?;

    let extractor = CopyrightExtractor::new(&config.copyright)?;
    let aggregation = aggregate(records, &extractor);
    terminal::skipped(&aggregation.skipped);
    let summaries = aggregation.summaries;
    terminal::found(summaries.len());

    terminal::writing(&paths.output);
    report::csv::write(&summaries, &paths.output)?;
    terminal::generated(&paths.output, summaries.len());

    Ok(summaries.len())
}
