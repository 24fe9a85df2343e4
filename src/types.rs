//! Common types used throughout ogc-kit
//!
//! This module contains shared type definitions, type aliases,
//! and media type constants used across multiple modules.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Media Types
// ============================================================================

/// Plain JSON
pub const MEDIA_JSON: &str = "application/json";

/// GeoJSON
pub const MEDIA_GEOJSON: &str = "application/geo+json";

/// YAML
pub const MEDIA_YAML: &str = "application/x-yaml";

/// GML 3.2
pub const MEDIA_GML32: &str = "application/gml+xml; version=3.2";

/// HTML
pub const MEDIA_HTML: &str = "text/html";

/// KML
pub const MEDIA_KML: &str = "application/vnd.google-earth.kml+xml";

// ============================================================================
// Response Bindings
// ============================================================================

/// Logical payload type returned by an endpoint.
///
/// The format registry is keyed on this: every endpoint sharing a binding
/// supports the same set of output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseBinding {
    /// The API description document itself
    ApiDocument,
    /// Conformance declaration
    Conformance,
    /// Collection listing and single collection metadata
    Collections,
    /// Feature collections and single features
    FeatureCollection,
}

impl ResponseBinding {
    /// All bindings, in declaration order
    pub const ALL: [ResponseBinding; 4] = [
        ResponseBinding::ApiDocument,
        ResponseBinding::Conformance,
        ResponseBinding::Collections,
        ResponseBinding::FeatureCollection,
    ];

    /// Short name used in configuration and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseBinding::ApiDocument => "api_document",
            ResponseBinding::Conformance => "conformance",
            ResponseBinding::Collections => "collections",
            ResponseBinding::FeatureCollection => "feature_collection",
        }
    }
}

impl fmt::Display for ResponseBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
