use std::collections::HashMap;

use crate::license::copyright::CopyrightExtractor;
use crate::license::holder::fallback_holder;
use crate::models::{ComponentSummary, PackageRecord};

/// A later manifest entry dropped because its name was already summarized.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedDuplicate {
    pub name: String,
    pub skipped_version: String,
    pub kept_version: String,
}

/// Result of [`aggregate`]: one summary per component, plus what was dropped.
#[derive(Debug, Default)]
pub struct Aggregation {
    /// Summaries in first-seen order.
    pub summaries: Vec<ComponentSummary>,
    pub skipped: Vec<SkippedDuplicate>,
}

/// Collapse records to one summary per component name.
///
/// The first record seen for a name wins; later versions of the same
/// component are dropped whole, even when their license or origin differ.
pub fn aggregate(records: Vec<PackageRecord>, extractor: &CopyrightExtractor) -> Aggregation {
    // name -> version of the kept record
    let mut seen: HashMap<String, String> = HashMap::new();
    let mut aggregation = Aggregation::default();

    for record in records {
        if let Some(kept_version) = seen.get(&record.name) {
            aggregation.skipped.push(SkippedDuplicate {
                name: record.name,
                skipped_version: record.version,
                kept_version: kept_version.clone(),
            });
            continue;
        }
        seen.insert(record.name.clone(), record.version);

        let mut copyright = extractor.extract(&record.license_texts, &record.name);
        if copyright.is_empty() {
            copyright = fallback_holder(&record.name, &record.repository);
        }

        aggregation.summaries.push(ComponentSummary {
            component: record.name,
            origin: record.repository,
            license: record.license,
            copyright,
        });
    }

    aggregation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CopyrightConfig;

    fn record(name: &str, version: &str, license: &str, text: &str) -> PackageRecord {
        PackageRecord {
            name: name.to_string(),
            version: version.to_string(),
            repository: format!("https://github.com/example/{}", name),
            license: license.to_string(),
            license_texts: vec![text.to_string()],
        }
    }

    fn extractor() -> CopyrightExtractor {
        CopyrightExtractor::new(&CopyrightConfig::default()).unwrap()
    }

    #[test]
    fn test_first_record_wins() {
        let mut later = record("serde", "1.1", "Apache-2.0", "Copyright 2021 Someone Else");
        later.repository = "https://example.com/fork".to_string();
        let records = vec![
            record("serde", "1.0", "MIT", "Copyright (c) 2014 Erick Tryzelaar"),
            later,
        ];

        let summaries = aggregate(records, &extractor()).summaries;
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].component, "serde");
        assert_eq!(summaries[0].origin, "https://github.com/example/serde");
        assert_eq!(summaries[0].license, "MIT");
        assert_eq!(summaries[0].copyright, "Erick Tryzelaar");
    }

    #[test]
    fn test_skipped_duplicates_record_versions() {
        let records = vec![
            record("serde", "1.0", "MIT", ""),
            record("tokio", "1.25", "MIT", ""),
            record("serde", "1.1", "MIT", ""),
            record("serde", "1.2", "MIT", ""),
        ];

        let skipped = aggregate(records, &extractor()).skipped;
        assert_eq!(
            skipped,
            vec![
                SkippedDuplicate {
                    name: "serde".to_string(),
                    skipped_version: "1.1".to_string(),
                    kept_version: "1.0".to_string(),
                },
                SkippedDuplicate {
                    name: "serde".to_string(),
                    skipped_version: "1.2".to_string(),
                    kept_version: "1.0".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_preserves_first_seen_order() {
        let records = vec![
            record("tokio", "1.0", "MIT", ""),
            record("anyhow", "1.0", "MIT", ""),
            record("tokio", "1.1", "MIT", ""),
            record("bytes", "1.0", "MIT", ""),
        ];

        let names: Vec<String> = aggregate(records, &extractor())
            .summaries
            .into_iter()
            .map(|s| s.component)
            .collect();
        assert_eq!(names, vec!["tokio", "anyhow", "bytes"]);
    }

    #[test]
    fn test_copyright_falls_back_to_name() {
        let summaries = aggregate(vec![record("widget", "0.1", "MIT", "")], &extractor()).summaries;
        assert_eq!(summaries[0].copyright, "The widget Authors");
    }

    #[test]
    fn test_empty_input() {
        let aggregation = aggregate(Vec::new(), &extractor());
        assert!(aggregation.summaries.is_empty());
        assert!(aggregation.skipped.is_empty());
    }
}
