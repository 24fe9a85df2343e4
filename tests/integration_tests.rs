//! Integration tests
//!
//! Tests the full flow: settings YAML → API description / paged KML output

use ogc_kit::catalog::InMemoryCatalog;
use ogc_kit::config::{load_settings, load_settings_from_str};
use ogc_kit::decorator::{
    DecoratorRegistry, FeatureCollectionInfo, GetMapRequest, KmlEncodingContext,
};
use ogc_kit::kml::{render_layer_page, to_kml_string, Feature};
use ogc_kit::openapi::{binary_schema, BaseRequest, OpenApiBuilder, DECLARED_GET_PATHS};
use ogc_kit::{Error, MEDIA_GEOJSON, MEDIA_GML32, MEDIA_HTML, MEDIA_JSON, MEDIA_YAML};
use pretty_assertions::assert_eq;
use std::io::Write;
use std::sync::Arc;

const BASE_URL: &str = "http://localhost:8080/geoserver";

const SETTINGS_YAML: &str = r#"
service:
  title: Demo features
  abstract: Roads and states
contact:
  person: Jane Doe
  organization: Example Org
  email: jane@example.org
  online_resource: https://example.org
product_name: DemoServer
manifests:
  - name: DemoServer
    entries:
      Version: "2.14.1"
namespaces:
  - prefix: topp
    uri: http://www.openplans.org/topp
  - prefix: tiger
    uri: http://www.census.gov
layers:
  - namespace: topp
    name: states
    title: USA Population
    feature_count: 49
  - namespace: tiger
    name: roads
    feature_count: 3
"#;

fn settings() -> ogc_kit::ServiceSettings {
    load_settings_from_str(SETTINGS_YAML).unwrap()
}

fn keys(api: &ogc_kit::OpenApi, path: &str) -> Vec<String> {
    api.get_response_content(path)
        .unwrap()
        .keys()
        .cloned()
        .collect()
}

// ============================================================================
// API Description
// ============================================================================

#[test]
fn test_api_description_from_settings_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SETTINGS_YAML.as_bytes()).unwrap();
    let settings = load_settings(file.path()).unwrap();

    let api = OpenApiBuilder::builtin()
        .unwrap()
        .build(&BaseRequest::new(BASE_URL), &settings, &settings.formats)
        .unwrap();

    assert_eq!(api.info.title, "Demo features");
    assert_eq!(api.info.description.as_deref(), Some("Roads and states"));
    assert_eq!(api.info.version, "2.14.1");
    let contact = api.info.contact.as_ref().unwrap();
    assert_eq!(contact.name.as_deref(), Some("Jane Doe - Example Org"));
    assert_eq!(contact.email.as_deref(), Some("jane@example.org"));
    assert_eq!(contact.url.as_deref(), Some("https://example.org"));

    assert_eq!(api.servers.len(), 1);
    assert_eq!(api.servers[0].url, "http://localhost:8080/geoserver/wfs3");
}

#[test]
fn test_default_formats_reconciled_on_every_path() {
    let settings = settings();
    let api = OpenApiBuilder::builtin()
        .unwrap()
        .build(&BaseRequest::new(BASE_URL), &settings, &settings.formats)
        .unwrap();

    assert_eq!(keys(&api, "/"), vec![MEDIA_JSON, MEDIA_YAML, MEDIA_HTML]);
    assert_eq!(
        keys(&api, "/collections/{collectionId}/items"),
        vec![MEDIA_GEOJSON, MEDIA_GML32, MEDIA_HTML]
    );

    // YAML shares the JSON schema kept from the template
    let root = api.get_response_content("/").unwrap();
    assert_eq!(root[MEDIA_YAML].schema, root[MEDIA_JSON].schema);

    // GML is neither text nor YAML
    let items = api
        .get_response_content("/collections/{collectionId}/items")
        .unwrap();
    assert_eq!(items[MEDIA_GML32].schema, Some(binary_schema()));

    for (path, _) in DECLARED_GET_PATHS {
        assert!(api.get_response_content(path).is_some(), "{path}");
    }
}

#[test]
fn test_api_description_serializes_both_ways() {
    let settings = settings();
    let api = OpenApiBuilder::builtin()
        .unwrap()
        .build(&BaseRequest::new(BASE_URL), &settings, &settings.formats)
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(&api.to_json().unwrap()).unwrap();
    assert_eq!(json["openapi"], "3.0.1");
    assert_eq!(json["externalDocs"]["description"], "WFS specification");
    assert!(json["components"].is_object());

    let yaml: serde_json::Value = serde_yaml::from_str(&api.to_yaml().unwrap()).unwrap();
    assert_eq!(yaml, json);
}

// ============================================================================
// Paged KML
// ============================================================================

fn render(layer: &str, request: GetMapRequest) -> String {
    let settings = settings();
    let catalog = InMemoryCatalog::from_settings(&settings).unwrap();
    let (prefix, name) = layer.split_once(':').unwrap();
    let layer = ogc_kit::catalog::Catalog::layer(&catalog, prefix, name)
        .unwrap()
        .unwrap();

    let collection = FeatureCollectionInfo::page_of(
        layer.feature_count,
        request.start_index.unwrap_or(0),
        request.max_features,
    );
    let ctx = KmlEncodingContext::new(request, Arc::new(catalog)).with_layer(layer, collection);
    let feature = render_layer_page(&ctx, &DecoratorRegistry::default()).unwrap();
    to_kml_string(&feature).unwrap()
}

#[test]
fn test_middle_page_has_both_links() {
    let request = GetMapRequest::new(BASE_URL)
        .with_start_index(10)
        .with_max_features(10)
        .with_format_option("relLinks", "true");
    let kml = render("topp:states", request);

    assert!(kml.contains("<name>states.11</name>"));
    assert!(kml.contains("<name>states.20</name>"));
    assert!(!kml.contains("<name>states.21</name>"));
    assert!(kml.contains(r#"<NetworkLink id="prev">"#));
    assert!(kml.contains(r#"<NetworkLink id="next">"#));
    assert!(kml.contains(
        "http://localhost:8080/geoserver/rest/topp/states.kml?startindex=0&amp;maxfeatures=10"
    ));
    assert!(kml.contains(
        "http://localhost:8080/geoserver/rest/topp/states.kml?startindex=20&amp;maxfeatures=10"
    ));
}

#[test]
fn test_short_last_page_has_no_next() {
    let request = GetMapRequest::new(BASE_URL)
        .with_start_index(40)
        .with_max_features(10)
        .with_format_option("relLinks", "true");
    let kml = render("topp:states", request);

    assert!(kml.contains("<name>states.49</name>"));
    assert!(kml.contains(r#"<NetworkLink id="prev">"#));
    assert!(!kml.contains(r#"<NetworkLink id="next">"#));
}

#[test]
fn test_links_use_layer_namespace_prefix() {
    let request = GetMapRequest::new(BASE_URL)
        .with_max_features(2)
        .with_format_option("relLinks", "true");
    let kml = render("tiger:roads", request);

    assert!(kml.contains("/rest/tiger/roads.kml?startindex=2&amp;maxfeatures=2"));
}

#[test]
fn test_without_rel_links_output_is_plain() {
    let request = GetMapRequest::new(BASE_URL)
        .with_start_index(10)
        .with_max_features(10);
    let kml = render("topp:states", request);

    assert!(!kml.contains("NetworkLink"));
    assert_eq!(kml.matches("<Placemark").count(), 10);
}

#[test]
fn test_unknown_namespace_fails_render() {
    let mut catalog = InMemoryCatalog::new();
    catalog
        .add_namespace(ogc_kit::catalog::NamespaceInfo::new("other", "urn:other"))
        .unwrap();
    let layer = ogc_kit::catalog::Layer::new(
        ogc_kit::catalog::QualifiedName::new("urn:missing", "ghost"),
        5,
    );
    let request = GetMapRequest::new(BASE_URL)
        .with_max_features(5)
        .with_format_option("relLinks", "true");
    let ctx = KmlEncodingContext::new(request, Arc::new(catalog))
        .with_layer(layer, FeatureCollectionInfo::new(5));

    let err = render_layer_page(&ctx, &DecoratorRegistry::default()).unwrap_err();
    assert!(matches!(err, Error::NamespaceNotFound { .. }));
}

#[test]
fn test_rendered_document_wraps_folder() {
    let settings = settings();
    let catalog = InMemoryCatalog::from_settings(&settings).unwrap();
    let ctx = KmlEncodingContext::new(GetMapRequest::new(BASE_URL), Arc::new(catalog));

    let feature = render_layer_page(&ctx, &DecoratorRegistry::default()).unwrap();
    match feature {
        Feature::Document(doc) => assert!(doc.features.is_empty()),
        other => panic!("expected document, got {other:?}"),
    }
}
