//! Previous/next page network links for paged feature collection folders

use super::types::{KmlDecorator, KmlDecoratorFactory, KmlEncodingContext};
use crate::catalog::Layer;
use crate::error::{Error, Result};
use crate::kml::{Feature, FeatureKind, Folder};
use crate::pagination::{PageLink, PageRequest};
use crate::urls::resource_url;
use url::Url;

/// Produces [`FolderRelativeLinksDecorator`]s for folders of paged requests
/// that opted into relative links.
#[derive(Debug, Clone, Copy, Default)]
pub struct FolderRelativeLinksDecoratorFactory;

impl KmlDecoratorFactory for FolderRelativeLinksDecoratorFactory {
    fn decorator(
        &self,
        kind: FeatureKind,
        ctx: &KmlEncodingContext,
    ) -> Option<Box<dyn KmlDecorator>> {
        if kind != FeatureKind::Folder {
            return None;
        }

        let page_size = ctx.request.max_features.filter(|n| *n > 0)?;
        if !ctx.request.rel_links_enabled() {
            return None;
        }

        Some(Box::new(FolderRelativeLinksDecorator { page_size }))
    }
}

/// Appends `prev`/`next` network links to a feature collection folder
#[derive(Debug, Clone, Copy)]
pub struct FolderRelativeLinksDecorator {
    page_size: u32,
}

impl FolderRelativeLinksDecorator {
    /// Decorator for pages of `page_size` features
    pub fn new(page_size: u32) -> Self {
        Self { page_size }
    }
}

impl KmlDecorator for FolderRelativeLinksDecorator {
    fn decorate(&self, feature: &mut Feature, ctx: &KmlEncodingContext) -> Result<()> {
        let (Some(layer), Some(collection)) =
            (&ctx.current_layer, &ctx.current_feature_collection)
        else {
            tracing::debug!("No current layer, skipping page links");
            return Ok(());
        };
        let Some(folder) = feature.as_folder_mut() else {
            return Ok(());
        };

        let link_base = format!("{}.kml", feature_type_url(ctx, layer)?);

        let page = PageRequest::new(
            ctx.request.start_index.unwrap_or(0),
            self.page_size,
            collection.size,
        );
        let links = page.links();
        tracing::debug!(
            layer = %layer.type_name,
            start_index = page.start_index,
            page_size = page.page_size,
            links = links.len(),
            "Encoding page links"
        );

        for link in links.iter() {
            encode_sequential_network_link(folder, &link_base, link)?;
        }
        Ok(())
    }
}

fn encode_sequential_network_link(folder: &mut Folder, link_base: &str, link: &PageLink) -> Result<()> {
    let mut href = Url::parse(link_base)?;
    {
        let mut pairs = href.query_pairs_mut();
        for (key, value) in link.query_params() {
            pairs.append_pair(key, &value);
        }
    }

    let network_link = folder.create_and_add_network_link();
    network_link.create_and_set_link().href = href.to_string();
    network_link.description = Some(link.label().to_string());
    network_link.id = Some(link.id().to_string());
    Ok(())
}

/// REST URL of the layer's feature type, resolved through the catalog
fn feature_type_url(ctx: &KmlEncodingContext, layer: &Layer) -> Result<Url> {
    let type_name = &layer.type_name;
    let ns = ctx
        .catalog
        .namespace_by_uri(&type_name.namespace_uri)?
        .ok_or_else(|| Error::namespace_not_found(&type_name.namespace_uri))?;
    resource_url(&ctx.request.base_url, &ns.prefix, &type_name.local_part)
}
