//! Name-based defaults used when no copyright line can be trusted.

pub const DATADOG_HOLDER: &str = "Datadog, Inc.";
pub const RUST_PROJECT_HOLDER: &str = "The Rust Project Developers";

/// Packages shipped with the Rust toolchain that carry no copyright line of their own.
pub const DEFAULT_RUNTIME_PACKAGES: &[&str] = &["libc", "std", "core"];

/// Holder inferred from the component name alone.
///
/// - `datadog` anywhere in the name (any case) → `Datadog, Inc.`
/// - `rust` anywhere in the name, or an exact runtime package name → `The Rust Project Developers`
/// - anything else → `The {name} Authors`, name kept verbatim
pub fn default_holder(name: &str, runtime_packages: &[String]) -> String {
    let lower = name.to_lowercase();

    if lower.contains("datadog") {
        return DATADOG_HOLDER.to_string();
    }

    if lower.contains("rust") || runtime_packages.iter().any(|p| p == name) {
        return RUST_PROJECT_HOLDER.to_string();
    }

    format!("The {} Authors", name)
}

/// Last-resort holder built from the name and repository, used when extraction
/// came back empty.
pub fn fallback_holder(name: &str, origin: &str) -> String {
    let name_lower = name.to_lowercase();
    let origin_lower = origin.to_lowercase();

    if name_lower.contains("rust") || origin_lower.contains("rust") {
        RUST_PROJECT_HOLDER.to_string()
    } else if origin_lower.contains("datadog") {
        DATADOG_HOLDER.to_string()
    } else {
        format!("{} Authors", name)
    }
}
