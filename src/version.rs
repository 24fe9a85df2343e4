//! Build manifests and version lookup

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Version published when no manifest provides one
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Manifest entry holding the version string
const VERSION_ENTRY: &str = "Version";

/// A named build manifest with free-form entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Manifest name (component or product)
    pub name: String,
    /// Manifest entries (e.g., "Version", "Git-Revision")
    #[serde(default)]
    pub entries: BTreeMap<String, String>,
}

impl Manifest {
    /// Create an empty manifest
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Add an entry
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

/// Version of `product`: the `Version` entry of the first manifest whose
/// name matches case-insensitively.
pub fn product_version<'a>(manifests: &'a [Manifest], product: &str) -> Option<&'a str> {
    manifests
        .iter()
        .find(|m| m.name.eq_ignore_ascii_case(product))
        .and_then(|m| m.entries.get(VERSION_ENTRY))
        .map(String::as_str)
}

/// Like [`product_version`], falling back to [`DEFAULT_VERSION`]
pub fn resolve_version(manifests: &[Manifest], product: &str) -> String {
    product_version(manifests, product).map_or_else(
        || {
            tracing::debug!(product, "No version manifest found, using default");
            DEFAULT_VERSION.to_string()
        },
        str::to_string,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifests() -> Vec<Manifest> {
        vec![
            Manifest::new("GeoTools").with_entry("Version", "30.1"),
            Manifest::new("MyServer").with_entry("Version", "2.24.1"),
            Manifest::new("NoVersion").with_entry("Git-Revision", "abc123"),
        ]
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let m = manifests();
        assert_eq!(product_version(&m, "myserver"), Some("2.24.1"));
        assert_eq!(product_version(&m, "MYSERVER"), Some("2.24.1"));
        assert_eq!(product_version(&m, "geotools"), Some("30.1"));
    }

    #[test]
    fn test_fallback_version() {
        let m = manifests();
        assert_eq!(resolve_version(&m, "unknown"), DEFAULT_VERSION);
        assert_eq!(resolve_version(&m, "NoVersion"), DEFAULT_VERSION);
        assert_eq!(resolve_version(&[], "MyServer"), DEFAULT_VERSION);
        assert_eq!(resolve_version(&m, "MyServer"), "2.24.1");
    }
}
