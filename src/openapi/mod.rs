//! API description module
//!
//! Synthesizes the OpenAPI document of the OGC API - Features endpoint.
//!
//! # Overview
//!
//! The openapi module provides:
//! - `ApiTemplate` - Static template, parsed once per process
//! - `OpenApiBuilder` - Patches a copy of the template with server identity,
//!   contact metadata and the live response formats of each path
//! - `FormatRegistry` - Source of the supported media types per binding
//! - `OpenApi` and friends - The patched parts of the document model

mod builder;
mod formats;
mod model;
mod template;

pub use builder::{
    BaseRequest, OpenApiBuilder, DECLARED_GET_PATHS, DEFAULT_TITLE, EXTERNAL_DOCS_DESCRIPTION,
    EXTERNAL_DOCS_URL, SERVER_DESCRIPTION, SERVICE_PATH,
};
pub use formats::{FormatRegistry, FormatTable};
pub use model::{
    binary_schema, string_schema, Contact, ExternalDocumentation, Info, MediaType, OpenApi,
    Operation, PathItem, Response, Schema, Server,
};
pub use template::ApiTemplate;
