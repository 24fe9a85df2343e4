//! Output format registry

use crate::types::{
    ResponseBinding, MEDIA_GEOJSON, MEDIA_GML32, MEDIA_HTML, MEDIA_JSON, MEDIA_YAML,
};
use serde::{Deserialize, Serialize};

/// Source of the media types currently supported for a response binding
pub trait FormatRegistry: Send + Sync {
    /// Media types available for `binding`, in preference order
    fn available_formats(&self, binding: ResponseBinding) -> Vec<String>;
}

/// Static format table, usually loaded from the service settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatTable {
    #[serde(default = "default_document_formats")]
    pub api_document: Vec<String>,

    #[serde(default = "default_document_formats")]
    pub conformance: Vec<String>,

    #[serde(default = "default_document_formats")]
    pub collections: Vec<String>,

    #[serde(default = "default_feature_formats")]
    pub feature_collection: Vec<String>,
}

impl Default for FormatTable {
    fn default() -> Self {
        Self {
            api_document: default_document_formats(),
            conformance: default_document_formats(),
            collections: default_document_formats(),
            feature_collection: default_feature_formats(),
        }
    }
}

fn default_document_formats() -> Vec<String> {
    vec![
        MEDIA_JSON.to_string(),
        MEDIA_YAML.to_string(),
        MEDIA_HTML.to_string(),
    ]
}

fn default_feature_formats() -> Vec<String> {
    vec![
        MEDIA_GEOJSON.to_string(),
        MEDIA_GML32.to_string(),
        MEDIA_HTML.to_string(),
    ]
}

impl FormatTable {
    /// Formats configured for `binding`
    pub fn get(&self, binding: ResponseBinding) -> &[String] {
        match binding {
            ResponseBinding::ApiDocument => &self.api_document,
            ResponseBinding::Conformance => &self.conformance,
            ResponseBinding::Collections => &self.collections,
            ResponseBinding::FeatureCollection => &self.feature_collection,
        }
    }

    /// Replace the formats of `binding`
    pub fn set(&mut self, binding: ResponseBinding, formats: Vec<String>) {
        let slot = match binding {
            ResponseBinding::ApiDocument => &mut self.api_document,
            ResponseBinding::Conformance => &mut self.conformance,
            ResponseBinding::Collections => &mut self.collections,
            ResponseBinding::FeatureCollection => &mut self.feature_collection,
        };
        *slot = formats;
    }
}

impl FormatRegistry for FormatTable {
    fn available_formats(&self, binding: ResponseBinding) -> Vec<String> {
        self.get(binding).to_vec()
    }
}
