//! KML output module
//!
//! # Overview
//!
//! The kml module provides:
//! - `Feature` - Closed set of KML node kinds (document, folder, placemark, network link)
//! - `to_kml_string` - XML encoding of a feature tree
//! - `render_layer_page` - Folder for one page of a layer, decorated

mod encoder;
mod render;
mod types;

pub use encoder::{to_kml_string, KML_NAMESPACE};
pub use render::render_layer_page;
pub use types::{Document, Feature, FeatureKind, Folder, Link, NetworkLink, Placemark};
