/// One entry of the third-party manifest, as loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRecord {
    pub name: String,
    /// Not part of the report; only reported when a later version is skipped.
    pub version: String,
    pub repository: String,
    pub license: String,
    /// License texts in manifest order; entries without text are empty strings.
    pub license_texts: Vec<String>,
}

/// One CSV row: a unique component and its attribution.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentSummary {
    pub component: String,
    pub origin: String,
    pub license: String,
    pub copyright: String,
}
