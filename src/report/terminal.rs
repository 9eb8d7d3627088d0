use std::path::Path;

use colored::*;

use crate::aggregate::SkippedDuplicate;

/// Announce the manifest about to be parsed.
pub fn reading(path: &Path) {
    println!("Reading {}...", path.display());
}

/// Report the number of components left after deduplication.
pub fn found(count: usize) {
    println!("Found {} unique components (deduplicated)", count);
}

/// Announce the CSV about to be written.
pub fn writing(path: &Path) {
    println!("Writing to {}...", path.display());
}

/// Final confirmation once the CSV is on disk.
pub fn generated(path: &Path, count: usize) {
    println!(
        "{} Generated {} with {} entries",
        "[OK]".green().bold(),
        path.display(),
        count
    );
}

/// One stderr line per manifest entry dropped in favour of an earlier version.
pub fn skipped(duplicates: &[SkippedDuplicate]) {
    for dup in duplicates {
        eprintln!(
            "  {} {} {} skipped (keeping {})",
            "→".cyan(),
            dup.name,
            dup.skipped_version,
            dup.kept_version
        );
    }
}

/// Two-line diagnostic for an absent manifest, on stderr.
pub fn missing_manifest(path: &Path) {
    eprintln!("{} {} not found", "Error:".red().bold(), path.display());
    eprintln!(
        "{}",
        "Please ensure libdatadog repository is cloned in the libdatadog/ directory".yellow()
    );
}
