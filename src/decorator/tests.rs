//! Tests for decorator module

use super::*;
use crate::catalog::{Catalog, InMemoryCatalog, Layer, NamespaceInfo, QualifiedName};
use crate::error::{Error, Result};
use crate::kml::{Feature, FeatureKind, Folder, NetworkLink, Placemark};
use std::sync::Arc;
use test_case::test_case;

const BASE_URL: &str = "http://localhost:8080/geoserver";
const TOPP: &str = "http://www.openplans.org/topp";

fn catalog() -> Arc<dyn Catalog> {
    let mut catalog = InMemoryCatalog::new();
    catalog.add_namespace(NamespaceInfo::new("topp", TOPP)).unwrap();
    Arc::new(catalog)
}

fn states() -> Layer {
    Layer::new(QualifiedName::new(TOPP, "states"), 49)
}

fn paged_request(start_index: u32, max_features: u32) -> GetMapRequest {
    GetMapRequest::new(BASE_URL)
        .with_start_index(start_index)
        .with_max_features(max_features)
        .with_format_option("relLinks", "true")
}

fn paged_context(start_index: u32, max_features: u32, returned: usize) -> KmlEncodingContext {
    KmlEncodingContext::new(paged_request(start_index, max_features), catalog())
        .with_layer(states(), FeatureCollectionInfo::new(returned))
}

/// Run the default registry on an empty folder and return its links
fn decorate_folder(ctx: &KmlEncodingContext) -> Result<Vec<NetworkLink>> {
    let mut feature = Feature::Folder(Folder::named("states"));
    DecoratorRegistry::with_defaults().decorate(&mut feature, ctx)?;
    Ok(feature.as_folder().unwrap().network_links().cloned().collect())
}

fn href(link: &NetworkLink) -> &str {
    &link.link.as_ref().unwrap().href
}

// ============================================================================
// GetMapRequest Tests
// ============================================================================

#[test]
fn test_format_options_case_insensitive() {
    let request = GetMapRequest::new(BASE_URL).with_format_option("RELLINKS", "TRUE");
    assert_eq!(request.format_option("relLinks"), Some("TRUE"));
    assert!(request.rel_links_enabled());
}

#[test_case(None, false ; "absent")]
#[test_case(Some("true"), true ; "lowercase")]
#[test_case(Some("True"), true ; "mixed case")]
#[test_case(Some("false"), false ; "false")]
#[test_case(Some("yes"), false ; "not a boolean")]
fn test_rel_links_enabled(value: Option<&str>, expected: bool) {
    let mut request = GetMapRequest::new(BASE_URL);
    if let Some(value) = value {
        request.set_format_option("relLinks", value);
    }
    assert_eq!(request.rel_links_enabled(), expected);
}

#[test]
fn test_parse_format_options() {
    let mut request = GetMapRequest::new(BASE_URL);
    request.parse_format_options("kmattr:false; relLinks:true;superoverlay");
    assert_eq!(request.format_option("kmattr"), Some("false"));
    assert_eq!(request.format_option("superoverlay"), Some("true"));
    assert!(request.rel_links_enabled());
}

#[test]
fn test_feature_collection_page_of() {
    assert_eq!(FeatureCollectionInfo::page_of(49, 0, Some(10)).size, 10);
    assert_eq!(FeatureCollectionInfo::page_of(49, 40, Some(10)).size, 9);
    assert_eq!(FeatureCollectionInfo::page_of(49, 60, Some(10)).size, 0);
    assert_eq!(FeatureCollectionInfo::page_of(49, 5, None).size, 44);
}

// ============================================================================
// Factory Applicability Tests
// ============================================================================

#[test]
fn test_factory_only_for_folders() {
    let ctx = paged_context(0, 10, 10);
    let factory = FolderRelativeLinksDecoratorFactory;

    assert!(factory.decorator(FeatureKind::Folder, &ctx).is_some());
    assert!(factory.decorator(FeatureKind::Document, &ctx).is_none());
    assert!(factory.decorator(FeatureKind::Placemark, &ctx).is_none());
    assert!(factory.decorator(FeatureKind::NetworkLink, &ctx).is_none());
}

#[test]
fn test_factory_requires_rel_links() {
    let request = GetMapRequest::new(BASE_URL).with_max_features(10);
    let ctx = KmlEncodingContext::new(request, catalog())
        .with_layer(states(), FeatureCollectionInfo::new(10));
    assert!(FolderRelativeLinksDecoratorFactory
        .decorator(FeatureKind::Folder, &ctx)
        .is_none());
    assert!(decorate_folder(&ctx).unwrap().is_empty());
}

#[test]
fn test_factory_requires_max_features() {
    let request = GetMapRequest::new(BASE_URL).with_format_option("relLinks", "true");
    let ctx = KmlEncodingContext::new(request, catalog())
        .with_layer(states(), FeatureCollectionInfo::new(10));
    assert!(FolderRelativeLinksDecoratorFactory
        .decorator(FeatureKind::Folder, &ctx)
        .is_none());
    assert!(decorate_folder(&ctx).unwrap().is_empty());
}

#[test]
fn test_zero_page_size_disables_paging() {
    let ctx = paged_context(0, 0, 10);
    assert!(decorate_folder(&ctx).unwrap().is_empty());
}

// ============================================================================
// Decoration Tests
// ============================================================================

#[test]
fn test_first_full_page_has_next_only() {
    let links = decorate_folder(&paged_context(0, 10, 10)).unwrap();

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].id.as_deref(), Some("next"));
    assert_eq!(links[0].description.as_deref(), Some("Next page"));
    assert_eq!(
        href(&links[0]),
        "http://localhost:8080/geoserver/rest/topp/states.kml?startindex=10&maxfeatures=10"
    );
}

#[test]
fn test_last_partial_page_has_previous_only() {
    let links = decorate_folder(&paged_context(10, 10, 5)).unwrap();

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].id.as_deref(), Some("prev"));
    assert_eq!(links[0].description.as_deref(), Some("Previous page"));
    assert_eq!(
        href(&links[0]),
        "http://localhost:8080/geoserver/rest/topp/states.kml?startindex=0&maxfeatures=10"
    );
}

#[test]
fn test_missing_start_index_defaults_to_zero() {
    let request = GetMapRequest::new(BASE_URL)
        .with_max_features(25)
        .with_format_option("relLinks", "true");
    let ctx = KmlEncodingContext::new(request, catalog())
        .with_layer(states(), FeatureCollectionInfo::new(25));

    let links = decorate_folder(&ctx).unwrap();
    assert_eq!(links.len(), 1);
    assert!(href(&links[0]).ends_with("?startindex=25&maxfeatures=25"));
}

#[test]
fn test_links_appended_after_existing_children() {
    let mut folder = Folder::named("states");
    folder.features.push(Feature::Placemark(Placemark::default()));
    let mut feature = Feature::Folder(folder);

    let ctx = paged_context(20, 10, 10);
    DecoratorRegistry::with_defaults()
        .decorate(&mut feature, &ctx)
        .unwrap();

    let folder = feature.as_folder().unwrap();
    let kinds: Vec<_> = folder.features.iter().map(Feature::kind).collect();
    assert_eq!(
        kinds,
        vec![
            FeatureKind::Placemark,
            FeatureKind::NetworkLink,
            FeatureKind::NetworkLink
        ]
    );
    assert_eq!(folder.name.as_deref(), Some("states"));
}

#[test]
fn test_decoration_is_deterministic() {
    let ctx = paged_context(20, 10, 10);
    assert_eq!(decorate_folder(&ctx).unwrap(), decorate_folder(&ctx).unwrap());
}

#[test]
fn test_no_current_layer_is_noop() {
    let ctx = KmlEncodingContext::new(paged_request(10, 10), catalog());
    assert!(decorate_folder(&ctx).unwrap().is_empty());
}

#[test]
fn test_no_feature_collection_is_noop() {
    let mut ctx = paged_context(10, 10, 10);
    ctx.current_feature_collection = None;
    assert!(decorate_folder(&ctx).unwrap().is_empty());
}

#[test]
fn test_non_folder_passes_through() {
    let ctx = paged_context(10, 10, 10);
    let mut feature = Feature::Placemark(Placemark::default());
    FolderRelativeLinksDecorator::new(10)
        .decorate(&mut feature, &ctx)
        .unwrap();
    assert_eq!(feature, Feature::Placemark(Placemark::default()));
}

// ============================================================================
// Failure Tests
// ============================================================================

#[test]
fn test_unknown_namespace_aborts() {
    let ctx = KmlEncodingContext::new(paged_request(10, 10), Arc::new(InMemoryCatalog::new()))
        .with_layer(states(), FeatureCollectionInfo::new(10));

    let err = decorate_folder(&ctx).unwrap_err();
    assert!(matches!(err, Error::NamespaceNotFound { .. }));
}

struct BrokenCatalog;

impl Catalog for BrokenCatalog {
    fn namespace_by_uri(&self, _uri: &str) -> Result<Option<NamespaceInfo>> {
        Err(Error::Other("catalog offline".to_string()))
    }

    fn namespace_by_prefix(&self, _prefix: &str) -> Result<Option<NamespaceInfo>> {
        Err(Error::Other("catalog offline".to_string()))
    }

    fn layer(&self, _prefix: &str, _name: &str) -> Result<Option<Layer>> {
        Err(Error::Other("catalog offline".to_string()))
    }
}

#[test]
fn test_catalog_failure_aborts() {
    let ctx = KmlEncodingContext::new(paged_request(0, 10), Arc::new(BrokenCatalog))
        .with_layer(states(), FeatureCollectionInfo::new(10));

    let err = decorate_folder(&ctx).unwrap_err();
    assert_eq!(err.to_string(), "catalog offline");
}

#[test]
fn test_invalid_base_url_aborts() {
    let request = GetMapRequest::new("no scheme here")
        .with_max_features(10)
        .with_format_option("relLinks", "true");
    let ctx = KmlEncodingContext::new(request, catalog())
        .with_layer(states(), FeatureCollectionInfo::new(10));

    assert!(matches!(
        decorate_folder(&ctx).unwrap_err(),
        Error::InvalidUrl(_)
    ));
}

// ============================================================================
// Registry Tests
// ============================================================================

struct RenameFolder;

impl KmlDecorator for RenameFolder {
    fn decorate(&self, feature: &mut Feature, _ctx: &KmlEncodingContext) -> Result<()> {
        if let Some(folder) = feature.as_folder_mut() {
            folder.name = Some("renamed".to_string());
        }
        Ok(())
    }
}

struct RenameFolderFactory;

impl KmlDecoratorFactory for RenameFolderFactory {
    fn decorator(
        &self,
        kind: FeatureKind,
        _ctx: &KmlEncodingContext,
    ) -> Option<Box<dyn KmlDecorator>> {
        (kind == FeatureKind::Folder).then(|| Box::new(RenameFolder) as Box<dyn KmlDecorator>)
    }
}

#[test]
fn test_registry_runs_all_applicable() {
    let mut registry = DecoratorRegistry::with_defaults();
    registry.register(RenameFolderFactory);
    assert_eq!(registry.len(), 2);

    let ctx = paged_context(10, 10, 10);
    assert_eq!(registry.decorators_for(FeatureKind::Folder, &ctx).len(), 2);
    assert!(registry
        .decorators_for(FeatureKind::Placemark, &ctx)
        .is_empty());

    let mut feature = Feature::Folder(Folder::named("states"));
    registry.decorate(&mut feature, &ctx).unwrap();
    let folder = feature.as_folder().unwrap();
    assert_eq!(folder.name.as_deref(), Some("renamed"));
    assert_eq!(folder.network_links().count(), 2);
}

#[test]
fn test_empty_registry() {
    let registry = DecoratorRegistry::empty();
    assert!(registry.is_empty());

    let ctx = paged_context(10, 10, 10);
    let mut feature = Feature::Folder(Folder::named("states"));
    registry.decorate(&mut feature, &ctx).unwrap();
    assert_eq!(feature, Feature::Folder(Folder::named("states")));
}
