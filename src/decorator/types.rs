//! Decorator types and traits
//!
//! Defines the encoding context handed to decorators and the two traits
//! every decorator implements: a factory deciding applicability once per
//! node kind, and the decorator mutating matching nodes.

use crate::catalog::{Catalog, Layer};
use crate::error::Result;
use crate::kml::{Feature, FeatureKind};
use std::collections::HashMap;
use std::sync::Arc;

/// Format option enabling previous/next page links
pub const REL_LINKS_OPTION: &str = "relLinks";

/// Parameters of the map request being encoded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetMapRequest {
    /// Public base URL of the server
    pub base_url: String,
    /// Page size; paging is disabled when absent
    pub max_features: Option<u32>,
    /// Offset of the first feature
    pub start_index: Option<u32>,
    /// Vendor format options, keyed case-insensitively
    format_options: HashMap<String, String>,
}

impl GetMapRequest {
    /// Create a request against `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Set the page size
    #[must_use]
    pub fn with_max_features(mut self, max_features: u32) -> Self {
        self.max_features = Some(max_features);
        self
    }

    /// Set the start index
    #[must_use]
    pub fn with_start_index(mut self, start_index: u32) -> Self {
        self.start_index = Some(start_index);
        self
    }

    /// Add a format option
    #[must_use]
    pub fn with_format_option(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set_format_option(key, value);
        self
    }

    /// Set a format option
    pub fn set_format_option(&mut self, key: &str, value: impl Into<String>) {
        self.format_options
            .insert(key.to_ascii_lowercase(), value.into());
    }

    /// Look up a format option, ignoring key case
    pub fn format_option(&self, key: &str) -> Option<&str> {
        self.format_options
            .get(&key.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Merge options given as `key:value;key2:value2`. A key without a
    /// value is taken as `true`.
    pub fn parse_format_options(&mut self, raw: &str) {
        for entry in raw.split(';').map(str::trim).filter(|e| !e.is_empty()) {
            match entry.split_once(':') {
                Some((key, value)) => self.set_format_option(key.trim(), value.trim()),
                None => self.set_format_option(entry, "true"),
            }
        }
    }

    /// Whether the client asked for previous/next page links
    pub fn rel_links_enabled(&self) -> bool {
        self.format_option(REL_LINKS_OPTION)
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }
}

/// The feature collection being encoded for the current layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCollectionInfo {
    /// Number of features on the current page
    pub size: usize,
}

impl FeatureCollectionInfo {
    /// Collection holding `size` features
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// The page of a source holding `total` features that starts at
    /// `start_index` and holds at most `max_features`
    pub fn page_of(total: usize, start_index: u32, max_features: Option<u32>) -> Self {
        let remaining = total.saturating_sub(start_index as usize);
        let size = max_features.map_or(remaining, |max| remaining.min(max as usize));
        Self { size }
    }
}

/// Everything a decorator may look at while a response is encoded
pub struct KmlEncodingContext {
    /// The request being answered
    pub request: GetMapRequest,
    /// Catalog for namespace lookups
    pub catalog: Arc<dyn Catalog>,
    /// Layer currently being encoded, if any
    pub current_layer: Option<Layer>,
    /// Feature collection currently being encoded, if any
    pub current_feature_collection: Option<FeatureCollectionInfo>,
}

impl KmlEncodingContext {
    /// Context with no current layer
    pub fn new(request: GetMapRequest, catalog: Arc<dyn Catalog>) -> Self {
        Self {
            request,
            catalog,
            current_layer: None,
            current_feature_collection: None,
        }
    }

    /// Set the layer and collection being encoded
    #[must_use]
    pub fn with_layer(mut self, layer: Layer, collection: FeatureCollectionInfo) -> Self {
        self.current_layer = Some(layer);
        self.current_feature_collection = Some(collection);
        self
    }
}

/// Mutates KML nodes of one kind as they are encoded
pub trait KmlDecorator: Send + Sync {
    /// Decorate `feature` in place. Errors abort the whole encoding.
    fn decorate(&self, feature: &mut Feature, ctx: &KmlEncodingContext) -> Result<()>;
}

/// Decides whether a decorator applies to a kind of node
pub trait KmlDecoratorFactory: Send + Sync {
    /// Decorator for nodes of `kind` under this request, or `None`
    fn decorator(&self, kind: FeatureKind, ctx: &KmlEncodingContext)
        -> Option<Box<dyn KmlDecorator>>;
}
