//! API description template
//!
//! The built-in template is parsed once per process. Builds never touch
//! the parsed tree: they work on a deep copy from [`ApiTemplate::instantiate`].

use super::model::OpenApi;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Built-in template source
const BUILTIN_TEMPLATE: &str = include_str!("openapi.yaml");

/// Parsed built-in template. A parse failure is kept and reported to every
/// caller; it is never retried.
static BUILTIN: LazyLock<std::result::Result<ApiTemplate, String>> = LazyLock::new(|| {
    ApiTemplate::parse(BUILTIN_TEMPLATE).map_err(|e| {
        tracing::error!(error = %e, "Built-in API description template is invalid");
        e.to_string()
    })
});

/// An immutable, parsed API description template
#[derive(Debug, Clone)]
pub struct ApiTemplate {
    document: OpenApi,
}

impl ApiTemplate {
    /// The built-in template
    pub fn builtin() -> Result<&'static ApiTemplate> {
        BUILTIN.as_ref().map_err(|message| Error::service(message.clone()))
    }

    /// Parse a template from YAML (JSON is accepted too, being valid YAML)
    pub fn parse(yaml: &str) -> Result<Self> {
        let document: OpenApi = serde_yaml::from_str(yaml).map_err(|e| {
            Error::service(format!("Failed to parse the API description template: {e}"))
        })?;
        Ok(Self { document })
    }

    /// Load and parse a template file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::service(format!(
                "Failed to read the API description template '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&content)
    }

    /// Read-only view of the parsed template
    pub fn document(&self) -> &OpenApi {
        &self.document
    }

    /// A fresh, independently mutable copy of the template
    pub fn instantiate(&self) -> OpenApi {
        self.document.clone()
    }
}
