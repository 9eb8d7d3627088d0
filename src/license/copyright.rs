use anyhow::Result;
use regex::Regex;

use crate::config::CopyrightConfig;
use crate::license::holder::{default_holder, DEFAULT_RUNTIME_PACKAGES};

/// `Copyright`, optional `(c)` / `©`, optional year or year range, then a
/// holder phrase starting with an uppercase letter up to end of line. A trailing
/// `<email>` is matched but left out of the capture.
pub const HOLDER_PATTERN: &str = r"(?m)Copyright\s+(?:\(c\)\s*)?(?:©\s*)?(?:\d{4}[-,\s\d]*\s+)?([A-Z][^\n]{3,80}?)(?:\s*<[^>]+>)?\s*(?:\n|$)";

/// Substrings (lowercase) that mark template or boilerplate text rather than a holder.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    "owner",
    "holder",
    "licensor",
    "entity",
    "permission",
    "notice",
    "granting",
    "laws",
    "author or",
    "contributors",
    "reserved",
    "yyyy",
    "[year]",
    "[name",
    "<year>",
    "<name>",
    "all rights",
    "subject to",
    "terms and conditions",
    "license.",
    "licensed under",
];

const MIN_HOLDER_LEN: usize = 5;
const MAX_HOLDER_LEN: usize = 80;
const MIN_ALPHABETIC: usize = 3;

/// Picks a copyright holder out of license texts.
///
/// Rules are plain data: the compiled [`HOLDER_PATTERN`], an exclusion
/// vocabulary and the runtime package names used by the name fallback.
#[derive(Debug, Clone)]
pub struct CopyrightExtractor {
    pattern: Regex,
    exclusions: Vec<String>,
    runtime_packages: Vec<String>,
}

impl CopyrightExtractor {
    /// Build the extractor from the default rules extended by `config`.
    pub fn new(config: &CopyrightConfig) -> Result<Self> {
        let exclusions = DEFAULT_EXCLUSIONS
            .iter()
            .map(|s| s.to_string())
            .chain(config.extra_exclusions.iter().cloned())
            .collect();

        let runtime_packages = DEFAULT_RUNTIME_PACKAGES
            .iter()
            .map(|s| s.to_string())
            .chain(config.runtime_packages.iter().cloned())
            .collect();

        Ok(Self::with_rules(
            Regex::new(HOLDER_PATTERN)?,
            exclusions,
            runtime_packages,
        ))
    }

    pub fn with_rules(
        pattern: Regex,
        exclusions: Vec<String>,
        runtime_packages: Vec<String>,
    ) -> Self {
        Self {
            pattern,
            exclusions: exclusions.into_iter().map(|e| e.to_lowercase()).collect(),
            runtime_packages,
        }
    }

    /// Best-guess copyright holder for `name`. Never empty.
    ///
    /// The shortest plausible candidate across all texts wins; on equal length
    /// the first one found is kept. Without any candidate the holder is derived
    /// from the name (see [`default_holder`]).
    pub fn extract(&self, license_texts: &[String], name: &str) -> String {
        let mut best: Option<String> = None;

        for text in license_texts.iter().filter(|t| !t.is_empty()) {
            for candidate in self.candidates(text) {
                let shorter = best
                    .as_ref()
                    .map_or(true, |b| candidate.chars().count() < b.chars().count());
                if shorter {
                    best = Some(candidate);
                }
            }
        }

        best.unwrap_or_else(|| default_holder(name, &self.runtime_packages))
    }

    /// Normalized candidates in `text` that survive every rejection rule, in scan order.
    fn candidates<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| normalize(m.as_str()))
            .filter(move |c| self.is_plausible(c))
    }

    fn is_plausible(&self, candidate: &str) -> bool {
        let lower = candidate.to_lowercase();
        if self.exclusions.iter().any(|e| lower.contains(e.as_str())) {
            return false;
        }

        let len = candidate.chars().count();
        if !(MIN_HOLDER_LEN..=MAX_HOLDER_LEN).contains(&len) {
            return false;
        }

        candidate.chars().filter(|c| c.is_alphabetic()).count() >= MIN_ALPHABETIC
    }
}

/// Collapse whitespace runs to one space and drop trailing `.,;:`.
pub fn normalize(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .trim_end_matches(|c| matches!(c, '.' | ',' | ';' | ':'))
        .to_string()
}
