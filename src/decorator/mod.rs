//! KML decorator module
//!
//! Decorators mutate nodes of the KML output tree while it is encoded.
//!
//! # Overview
//!
//! The decorator module provides:
//! - `KmlEncodingContext` - Request, catalog and current layer of the encoding
//! - `KmlDecoratorFactory` / `KmlDecorator` - Applicability per node kind, then mutation
//! - `FolderRelativeLinksDecoratorFactory` - Previous/next page network links
//! - `DecoratorRegistry` - Ordered factories run by the renderer

mod registry;
mod relative_links;
mod types;

pub use registry::DecoratorRegistry;
pub use relative_links::{FolderRelativeLinksDecorator, FolderRelativeLinksDecoratorFactory};
pub use types::{
    FeatureCollectionInfo, GetMapRequest, KmlDecorator, KmlDecoratorFactory, KmlEncodingContext,
    REL_LINKS_OPTION,
};

#[cfg(test)]
mod tests;
