//! Catalog types and traits

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A namespace: short prefix bound to a URI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceInfo {
    /// Short prefix (e.g., "topp")
    pub prefix: String,
    /// Namespace URI (e.g., "http://www.openplans.org/topp")
    pub uri: String,
}

impl NamespaceInfo {
    /// Create a new namespace
    pub fn new(prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            uri: uri.into(),
        }
    }
}

/// Name of a feature type, qualified by namespace URI
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    /// Namespace URI
    pub namespace_uri: String,
    /// Local part (e.g., "states")
    pub local_part: String,
}

impl QualifiedName {
    /// Create a new qualified name
    pub fn new(namespace_uri: impl Into<String>, local_part: impl Into<String>) -> Self {
        Self {
            namespace_uri: namespace_uri.into(),
            local_part: local_part.into(),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}{}", self.namespace_uri, self.local_part)
    }
}

/// A published layer backed by a feature source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    /// Feature type name of the backing source
    pub type_name: QualifiedName,
    /// Human-readable title
    pub title: Option<String>,
    /// Number of features in the backing source
    pub feature_count: usize,
}

impl Layer {
    /// Create a new layer
    pub fn new(type_name: QualifiedName, feature_count: usize) -> Self {
        Self {
            type_name,
            title: None,
            feature_count,
        }
    }

    /// Set the title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Read-only catalog lookups.
///
/// Lookups return `Ok(None)` when nothing matches; `Err` is reserved for
/// failures of the catalog itself.
pub trait Catalog: Send + Sync {
    /// Find a namespace by its URI
    fn namespace_by_uri(&self, uri: &str) -> Result<Option<NamespaceInfo>>;

    /// Find a namespace by its prefix
    fn namespace_by_prefix(&self, prefix: &str) -> Result<Option<NamespaceInfo>>;

    /// Find a layer by namespace prefix and local name
    fn layer(&self, prefix: &str, name: &str) -> Result<Option<Layer>>;
}
