// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # ogc-kit
//!
//! Helpers for an OGC web-feature service: the OpenAPI description of the
//! WFS 3.0 endpoint and previous/next page links in paged KML output.
//!
//! ## Features
//!
//! - **API description**: Patches a static OpenAPI template with the server
//!   URL, contact metadata and the formats the server can actually produce
//! - **KML paging**: Adds `prev`/`next` network links to the layer folder of
//!   a paged KML response
//! - **Settings**: Service identity, formats, namespaces and layers from YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ogc_kit::config::load_settings;
//! use ogc_kit::openapi::{BaseRequest, OpenApiBuilder};
//!
//! let settings = load_settings("service.yaml")?;
//! let api = OpenApiBuilder::builtin()?.build(
//!     &BaseRequest::new("http://localhost:8080/geoserver"),
//!     &settings,
//!     &settings.formats,
//! )?;
//! println!("{}", api.to_yaml()?);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                 ServiceSettings (YAML)                       │
//! └──────────────────────────────────────────────────────────────┘
//!            │                                   │
//! ┌──────────┴──────────┐             ┌──────────┴──────────────┐
//! │  OpenApiBuilder     │             │  render_layer_page      │
//! │  template + formats │             │  Folder + placemarks    │
//! │  → OpenApi          │             │  → DecoratorRegistry    │
//! └─────────────────────┘             │  → prev/next links      │
//!                                     └─────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and media type constants
pub mod types;

/// URL building helpers
pub mod urls;

/// Namespace and layer lookups
pub mod catalog;

/// Service settings
pub mod config;

/// Product version lookup from manifests
pub mod version;

/// Previous/next page computation
pub mod pagination;

/// KML feature tree and encoding
pub mod kml;

/// KML decorators
pub mod decorator;

/// OpenAPI description synthesis
pub mod openapi;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::{load_settings, load_settings_from_str, ServiceSettings};
pub use decorator::{DecoratorRegistry, KmlEncodingContext};
pub use openapi::{OpenApi, OpenApiBuilder};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
