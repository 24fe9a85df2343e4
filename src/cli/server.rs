//! HTTP server mode: API description and paged KML over REST

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::catalog::{Catalog, InMemoryCatalog};
use crate::config::ServiceSettings;
use crate::decorator::{DecoratorRegistry, FeatureCollectionInfo, GetMapRequest, KmlEncodingContext};
use crate::error::{Error, Result, ResultExt};
use crate::kml::{render_layer_page, to_kml_string};
use crate::openapi::{BaseRequest, OpenApiBuilder};
use crate::types::{MEDIA_JSON, MEDIA_KML, MEDIA_YAML};

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// Public base URL used in generated links
    pub base_url: String,
    /// Service settings
    pub settings: ServiceSettings,
}

/// App state shared across handlers
struct AppState {
    base_url: String,
    settings: ServiceSettings,
    catalog: Arc<dyn Catalog>,
    decorators: DecoratorRegistry,
}

/// Query parameters of the API description endpoint
#[derive(Debug, Deserialize)]
struct ApiQuery {
    /// Output format: "json" or "yaml" (default: "json")
    #[serde(default)]
    f: Option<String>,
}

/// Query parameters of the KML endpoint
#[derive(Debug, Deserialize)]
struct KmlQuery {
    #[serde(default)]
    startindex: Option<u32>,
    #[serde(default)]
    maxfeatures: Option<u32>,
    /// Vendor options as `key:value;key2:value2`
    #[serde(default)]
    format_options: Option<String>,
}

/// Response wrapper
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn error(msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// Build the application router
pub fn router(config: ServerConfig) -> Result<Router> {
    let catalog = InMemoryCatalog::from_settings(&config.settings)?;
    let state = AppState {
        base_url: config.base_url,
        settings: config.settings,
        catalog: Arc::new(catalog),
        decorators: DecoratorRegistry::with_defaults(),
    };

    // Build CORS layer - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(Router::new()
        .route("/health", get(health))
        .route("/wfs3/api", get(api_description))
        .route("/rest/:prefix/:resource", get(layer_kml))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state)))
}

/// Start the HTTP server
pub async fn serve(config: ServerConfig, port: u16) -> Result<()> {
    let app = router(config)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to port {port}"))?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// API description in JSON or YAML
async fn api_description(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ApiQuery>,
) -> Response {
    match render_api_description(&state, query.f.as_deref()) {
        Ok((content_type, body)) => ([(header::CONTENT_TYPE, content_type)], body).into_response(),
        Err(e) => error_response(&e),
    }
}

fn render_api_description(state: &AppState, f: Option<&str>) -> Result<(&'static str, String)> {
    let yaml = match f.map(str::to_ascii_lowercase).as_deref() {
        None | Some("json" | MEDIA_JSON) => false,
        Some("yaml" | MEDIA_YAML | "application/yaml") => true,
        Some(other) => return Err(Error::unsupported_format(other)),
    };

    let request = BaseRequest::new(&state.base_url);
    let api = OpenApiBuilder::builtin()?.build(&request, &state.settings, &state.settings.formats)?;

    if yaml {
        Ok((MEDIA_YAML, api.to_yaml()?))
    } else {
        Ok((MEDIA_JSON, api.to_json()?))
    }
}

/// One page of a layer as KML
async fn layer_kml(
    State(state): State<Arc<AppState>>,
    Path((prefix, resource)): Path<(String, String)>,
    Query(query): Query<KmlQuery>,
) -> Response {
    match render_layer_kml(&state, &prefix, &resource, query) {
        Ok(body) => ([(header::CONTENT_TYPE, MEDIA_KML)], body).into_response(),
        Err(e) => error_response(&e),
    }
}

fn render_layer_kml(state: &AppState, prefix: &str, resource: &str, query: KmlQuery) -> Result<String> {
    let name = resource
        .strip_suffix(".kml")
        .ok_or_else(|| Error::unsupported_format(resource))?;
    let layer = state
        .catalog
        .layer(prefix, name)?
        .ok_or_else(|| Error::layer_not_found(prefix, name))?;

    let mut request = GetMapRequest::new(&state.base_url);
    request.start_index = query.startindex;
    request.max_features = query.maxfeatures;
    if let Some(raw) = &query.format_options {
        request.parse_format_options(raw);
    }

    let collection = FeatureCollectionInfo::page_of(
        layer.feature_count,
        request.start_index.unwrap_or(0),
        request.max_features,
    );
    let ctx = KmlEncodingContext::new(request, Arc::clone(&state.catalog)).with_layer(layer, collection);

    to_kml_string(&render_layer_page(&ctx, &state.decorators)?)
}

fn error_response(err: &Error) -> Response {
    let status = match err {
        Error::LayerNotFound { .. } => StatusCode::NOT_FOUND,
        Error::UnsupportedFormat { .. } => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if !err.is_client_error() {
        tracing::error!(error = %err, "Request failed");
    }
    (status, Json(ApiResponse::<()>::error(err.to_string()))).into_response()
}
