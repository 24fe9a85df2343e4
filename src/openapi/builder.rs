//! Per-request API description synthesis

use super::formats::FormatRegistry;
use super::model::{
    binary_schema, string_schema, Contact, ExternalDocumentation, Info, MediaType, OpenApi,
    Schema, Server,
};
use super::template::ApiTemplate;
use crate::config::ServiceSettings;
use crate::error::{Error, Result};
use crate::types::{ResponseBinding, MEDIA_JSON};
use crate::urls::build_url;
use crate::version::resolve_version;
use std::collections::{BTreeMap, BTreeSet};

/// Title published when the service has none
pub const DEFAULT_TITLE: &str = "WFS 3.0 server";

/// External documentation description
pub const EXTERNAL_DOCS_DESCRIPTION: &str = "WFS specification";

/// External documentation URL
pub const EXTERNAL_DOCS_URL: &str = "https://github.com/opengeospatial/WFS_FES";

/// Path of the API root below the server base URL
pub const SERVICE_PATH: &str = "wfs3";

/// Description of the single published server entry
pub const SERVER_DESCRIPTION: &str = "This server";

/// Paths whose GET response formats follow the format registry
pub const DECLARED_GET_PATHS: [(&str, ResponseBinding); 6] = [
    ("/", ResponseBinding::ApiDocument),
    ("/conformance", ResponseBinding::Conformance),
    ("/collections", ResponseBinding::Collections),
    ("/collections/{collectionId}", ResponseBinding::Collections),
    (
        "/collections/{collectionId}/items",
        ResponseBinding::FeatureCollection,
    ),
    (
        "/collections/{collectionId}/items/{featureId}",
        ResponseBinding::FeatureCollection,
    ),
];

/// The request an API description is built for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseRequest {
    /// Public base URL of the server
    pub base_url: String,
}

impl BaseRequest {
    /// Create a new request
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// Builds API description documents from a template
#[derive(Debug, Clone, Copy)]
pub struct OpenApiBuilder<'a> {
    template: &'a ApiTemplate,
}

impl OpenApiBuilder<'static> {
    /// Builder over the built-in template
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(ApiTemplate::builtin()?))
    }
}

impl<'a> OpenApiBuilder<'a> {
    /// Builder over `template`
    pub fn new(template: &'a ApiTemplate) -> Self {
        Self { template }
    }

    /// Build a description reflecting the current settings and formats
    pub fn build(
        &self,
        request: &BaseRequest,
        settings: &ServiceSettings,
        formats: &dyn FormatRegistry,
    ) -> Result<OpenApi> {
        let mut api = self.template.instantiate();

        let contact = Contact {
            name: Some(settings.contact.display_name()),
            email: settings.contact.email.clone(),
            url: settings.contact.online_resource.clone(),
        };
        let title = settings
            .service
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());
        api.info = Info {
            title,
            description: settings.service.abstract_text.clone(),
            version: resolve_version(&settings.manifests, &settings.product_name),
            contact: Some(contact),
            ..Info::default()
        };

        api.external_docs = Some(ExternalDocumentation {
            description: Some(EXTERNAL_DOCS_DESCRIPTION.to_string()),
            url: EXTERNAL_DOCS_URL.to_string(),
        });

        let service_url = build_url(&request.base_url, SERVICE_PATH, &[])?;
        api.servers = vec![Server {
            url: service_url.to_string(),
            description: Some(SERVER_DESCRIPTION.to_string()),
        }];

        for (path, binding) in DECLARED_GET_PATHS {
            let available = formats.available_formats(binding);
            declare_get_response_formats(&mut api, path, &available)?;
        }

        Ok(api)
    }
}

/// Make the GET 200 content types of `path` match `formats` exactly.
///
/// Unsupported content types are dropped first; new ones are then added in
/// lexicographic order, each getting a schema from [`schema_for_new_format`].
fn declare_get_response_formats(api: &mut OpenApi, path: &str, formats: &[String]) -> Result<()> {
    let content = api.get_response_content_mut(path).ok_or_else(|| {
        Error::service(format!(
            "API description template has no GET 200 response for '{path}'"
        ))
    })?;

    let supported: BTreeSet<&str> = formats.iter().map(String::as_str).collect();

    let before = content.len();
    content.retain(|media_type, _| supported.contains(media_type.as_str()));
    let removed = before - content.len();

    let mut added = 0;
    for format in supported {
        if content.contains_key(format) {
            continue;
        }
        let schema = schema_for_new_format(format, content);
        content.insert(format.to_string(), MediaType::with_schema(schema));
        added += 1;
    }

    tracing::debug!(path, removed, added, "Reconciled response formats");
    Ok(())
}

/// Schema for a content type missing from the template.
///
/// YAML shares the JSON structure, so it reuses the JSON schema when JSON is
/// declared; text formats get a string schema; anything else is opaque
/// binary.
fn schema_for_new_format(format: &str, content: &BTreeMap<String, MediaType>) -> Option<Schema> {
    if format.contains("yaml") {
        if let Some(json) = content.get(MEDIA_JSON) {
            return json.schema.clone();
        }
    }
    if format.contains("text") {
        Some(string_schema())
    } else {
        Some(binary_schema())
    }
}
