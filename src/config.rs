//! Service settings
//!
//! This module contains the configuration structures describing the
//! running service: its identity, contact metadata, version manifests,
//! supported output formats and the catalog seed. Settings are loaded
//! from YAML.

use crate::catalog::NamespaceInfo;
use crate::error::{Error, Result};
use crate::openapi::FormatTable;
use crate::version::Manifest;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

// ============================================================================
// Top-Level Settings
// ============================================================================

/// Complete service settings loaded from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// Service identity
    #[serde(default)]
    pub service: ServiceInfo,

    /// Contact metadata published in the API description
    #[serde(default)]
    pub contact: ContactInfo,

    /// Manifest name whose `Version` entry is the published version
    #[serde(default = "default_product_name")]
    pub product_name: String,

    /// Build manifests
    #[serde(default = "default_manifests")]
    pub manifests: Vec<Manifest>,

    /// Output formats supported per response binding
    #[serde(default)]
    pub formats: FormatTable,

    /// Namespaces to seed the catalog with
    #[serde(default)]
    pub namespaces: Vec<NamespaceInfo>,

    /// Layers to seed the catalog with
    #[serde(default)]
    pub layers: Vec<LayerDefinition>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            service: ServiceInfo::default(),
            contact: ContactInfo::default(),
            product_name: default_product_name(),
            manifests: default_manifests(),
            formats: FormatTable::default(),
            namespaces: Vec::new(),
            layers: Vec::new(),
        }
    }
}

fn default_product_name() -> String {
    crate::NAME.to_string()
}

fn default_manifests() -> Vec<Manifest> {
    vec![Manifest::new(crate::NAME).with_entry("Version", crate::VERSION)]
}

// ============================================================================
// Service Identity
// ============================================================================

/// Service title and abstract
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Service title
    #[serde(default)]
    pub title: Option<String>,

    /// Service abstract
    #[serde(rename = "abstract", default)]
    pub abstract_text: Option<String>,
}

/// Contact metadata, copied verbatim into published documents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Contact person
    #[serde(default)]
    pub person: Option<String>,

    /// Contact organization
    #[serde(default)]
    pub organization: Option<String>,

    /// Contact email
    #[serde(default)]
    pub email: Option<String>,

    /// Online resource URL
    #[serde(default)]
    pub online_resource: Option<String>,
}

impl ContactInfo {
    /// Person and organization joined with " - ", skipping absent parts.
    /// Empty when both are absent.
    pub fn display_name(&self) -> String {
        [self.person.as_deref(), self.organization.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" - ")
    }
}

// ============================================================================
// Catalog Seed
// ============================================================================

/// Layer definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerDefinition {
    /// Namespace prefix
    pub namespace: String,

    /// Local name
    pub name: String,

    /// Human-readable title
    #[serde(default)]
    pub title: Option<String>,

    /// Number of features served by the layer
    #[serde(default)]
    pub feature_count: usize,
}

// ============================================================================
// Loading
// ============================================================================

/// Load settings from a YAML file
pub fn load_settings(path: impl AsRef<Path>) -> Result<ServiceSettings> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    load_settings_from_str(&content)
}

/// Load settings from a YAML string
pub fn load_settings_from_str(yaml: &str) -> Result<ServiceSettings> {
    let settings: ServiceSettings = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse settings YAML: {e}")))?;

    validate_settings(&settings)?;
    Ok(settings)
}

/// Validate settings
fn validate_settings(settings: &ServiceSettings) -> Result<()> {
    if settings.product_name.trim().is_empty() {
        return Err(Error::config("product_name cannot be empty"));
    }

    let prefixes: HashSet<_> = settings.namespaces.iter().map(|n| &n.prefix).collect();
    if prefixes.len() != settings.namespaces.len() {
        return Err(Error::config("Duplicate namespace prefixes found"));
    }

    for layer in &settings.layers {
        if layer.name.is_empty() {
            return Err(Error::config("Layer name cannot be empty"));
        }
        if !prefixes.contains(&layer.namespace) {
            return Err(Error::config(format!(
                "Layer '{}' references unknown namespace '{}'",
                layer.name, layer.namespace
            )));
        }
    }

    Ok(())
}
