use std::path::Path;

use anyhow::{Context, Result};

use crate::models::ComponentSummary;

pub const HEADER: &str = "Component,Origin,License,Copyright";

/// Render the CSV document: header, then one row per summary sorted by
/// lowercase component name. Commas inside fields become semicolons.
pub fn render(summaries: &[ComponentSummary]) -> String {
    let mut sorted: Vec<&ComponentSummary> = summaries.iter().collect();
    sorted.sort_by_key(|s| s.component.to_lowercase());

    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');

    for s in sorted {
        let row = [&s.component, &s.origin, &s.license, &s.copyright]
            .iter()
            .map(|field| escape(field))
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&row);
        out.push('\n');
    }

    out
}

/// Write the rendered document to `path`, replacing any existing file.
pub fn write(summaries: &[ComponentSummary], path: &Path) -> Result<()> {
    std::fs::write(path, render(summaries))
        .with_context(|| format!("failed to write {}", path.display()))
}

fn escape(field: &str) -> String {
    field.replace(',', ";")
}
