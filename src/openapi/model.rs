//! API description object model
//!
//! Only the parts of the document that get patched are typed. Everything
//! else (components, tags, parameters, ...) is kept verbatim in the
//! `extra` maps so a template round-trips without loss.
//!
//! Maps are `BTreeMap`s: paths, responses and content types always
//! serialize in lexicographic order.

use crate::error::Result;
use crate::types::{JsonObject, JsonValue};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;

/// A schema node. Schemas are immutable values once placed in a document.
pub type Schema = JsonValue;

/// Generic string-valued schema
pub fn string_schema() -> Schema {
    json!({ "type": "string" })
}

/// Generic opaque-binary schema
pub fn binary_schema() -> Schema {
    json!({ "type": "string", "format": "binary" })
}

/// Root of an API description document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApi {
    /// OpenAPI version of the document
    pub openapi: String,

    /// API metadata
    #[serde(default)]
    pub info: Info,

    /// External documentation
    #[serde(
        rename = "externalDocs",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub external_docs: Option<ExternalDocumentation>,

    /// Servers hosting the API
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,

    /// Path items keyed by path template
    #[serde(default)]
    pub paths: BTreeMap<String, PathItem>,

    /// Everything else
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl OpenApi {
    /// Content map of the GET 200 response of `path`, if declared
    pub fn get_response_content(&self, path: &str) -> Option<&BTreeMap<String, MediaType>> {
        self.paths
            .get(path)?
            .get
            .as_ref()?
            .responses
            .get("200")
            .map(|r| &r.content)
    }

    /// Mutable content map of the GET 200 response of `path`, if declared
    pub fn get_response_content_mut(
        &mut self,
        path: &str,
    ) -> Option<&mut BTreeMap<String, MediaType>> {
        self.paths
            .get_mut(path)?
            .get
            .as_mut()?
            .responses
            .get_mut("200")
            .map(|r| &mut r.content)
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize as YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// API metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,

    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Contact block of the API metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Link to external documentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalDocumentation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub url: String,
}

/// A server hosting the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Operations available on a single path
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,

    #[serde(flatten)]
    pub extra: JsonObject,
}

/// A single operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Responses keyed by status code (or "default")
    #[serde(default)]
    pub responses: BTreeMap<String, Response>,

    #[serde(flatten)]
    pub extra: JsonObject,
}

/// A single response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub description: String,

    /// Media types keyed by content type
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub content: BTreeMap<String, MediaType>,

    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Schema and examples for one content type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,

    #[serde(flatten)]
    pub extra: JsonObject,
}

impl MediaType {
    /// Media type with the given schema
    pub fn with_schema(schema: Option<Schema>) -> Self {
        Self {
            schema,
            extra: JsonObject::new(),
        }
    }
}
