//! In-memory catalog

use super::types::{Catalog, Layer, NamespaceInfo, QualifiedName};
use crate::config::ServiceSettings;
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Catalog held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    /// Namespaces keyed by prefix
    namespaces: HashMap<String, NamespaceInfo>,
    /// Layers keyed by (prefix, local name)
    layers: HashMap<(String, String), Layer>,
}

impl InMemoryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from the namespaces and layers in the settings
    pub fn from_settings(settings: &ServiceSettings) -> Result<Self> {
        let mut catalog = Self::new();
        for ns in &settings.namespaces {
            catalog.add_namespace(ns.clone())?;
        }
        for def in &settings.layers {
            let mut layer = Layer::new(
                QualifiedName::new(catalog.uri_for_prefix(&def.namespace)?, &def.name),
                def.feature_count,
            );
            layer.title.clone_from(&def.title);
            catalog.add_layer(layer)?;
        }
        Ok(catalog)
    }

    /// Register a namespace; prefixes and URIs must be unique
    pub fn add_namespace(&mut self, ns: NamespaceInfo) -> Result<()> {
        if self.namespaces.contains_key(&ns.prefix) {
            return Err(Error::config(format!(
                "Duplicate namespace prefix '{}'",
                ns.prefix
            )));
        }
        if self.namespaces.values().any(|n| n.uri == ns.uri) {
            return Err(Error::config(format!("Duplicate namespace URI '{}'", ns.uri)));
        }
        self.namespaces.insert(ns.prefix.clone(), ns);
        Ok(())
    }

    /// Register a layer; its namespace must already be known
    pub fn add_layer(&mut self, layer: Layer) -> Result<()> {
        let prefix = self
            .namespaces
            .values()
            .find(|n| n.uri == layer.type_name.namespace_uri)
            .map(|n| n.prefix.clone())
            .ok_or_else(|| Error::namespace_not_found(&layer.type_name.namespace_uri))?;
        let key = (prefix, layer.type_name.local_part.clone());
        if self.layers.contains_key(&key) {
            return Err(Error::config(format!(
                "Duplicate layer '{}:{}'",
                key.0, key.1
            )));
        }
        self.layers.insert(key, layer);
        Ok(())
    }

    /// Number of registered layers
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    fn uri_for_prefix(&self, prefix: &str) -> Result<String> {
        self.namespaces
            .get(prefix)
            .map(|n| n.uri.clone())
            .ok_or_else(|| Error::config(format!("Layer references unknown namespace '{prefix}'")))
    }
}

impl Catalog for InMemoryCatalog {
    fn namespace_by_uri(&self, uri: &str) -> Result<Option<NamespaceInfo>> {
        Ok(self.namespaces.values().find(|n| n.uri == uri).cloned())
    }

    fn namespace_by_prefix(&self, prefix: &str) -> Result<Option<NamespaceInfo>> {
        Ok(self.namespaces.get(prefix).cloned())
    }

    fn layer(&self, prefix: &str, name: &str) -> Result<Option<Layer>> {
        Ok(self
            .layers
            .get(&(prefix.to_string(), name.to_string()))
            .cloned())
    }
}
