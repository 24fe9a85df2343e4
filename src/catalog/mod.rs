//! Catalog module
//!
//! Read-only lookups of namespaces and layers.
//!
//! # Overview
//!
//! The catalog module provides:
//! - `Catalog` - Lookup trait used by the link decorator and the HTTP server
//! - `InMemoryCatalog` - Catalog seeded from service settings
//! - `NamespaceInfo`, `QualifiedName`, `Layer` - Catalog entries

mod memory;
mod types;

pub use memory::InMemoryCatalog;
pub use types::{Catalog, Layer, NamespaceInfo, QualifiedName};
