//! Layer page rendering
//!
//! Builds the folder for one page of a layer and runs the registered
//! decorators over it. Geometry and style encoding are not handled here:
//! placemarks only carry identity.

use super::types::{Document, Feature, FeatureKind, Folder, Placemark};
use crate::decorator::{DecoratorRegistry, KmlEncodingContext};
use crate::error::Result;

/// Render the current page of the context's layer as a KML document.
///
/// Without a current layer the document is empty.
pub fn render_layer_page(ctx: &KmlEncodingContext, registry: &DecoratorRegistry) -> Result<Feature> {
    let mut document = Document::default();

    if let Some(layer) = &ctx.current_layer {
        let name = &layer.type_name.local_part;
        let mut folder = Folder::named(name.clone());
        folder.description.clone_from(&layer.title);

        let start = ctx.request.start_index.unwrap_or(0) as usize;
        let size = ctx.current_feature_collection.map_or(0, |c| c.size);
        for index in start..start + size {
            let fid = format!("{name}.{}", index + 1);
            folder.features.push(Feature::Placemark(Placemark {
                id: Some(fid.clone()),
                name: Some(fid),
                description: None,
            }));
        }

        let mut folder = Feature::Folder(folder);
        for decorator in registry.decorators_for(FeatureKind::Folder, ctx) {
            decorator.decorate(&mut folder, ctx)?;
        }
        document.name = Some(name.clone());
        document.features.push(folder);
    }

    Ok(Feature::Document(document))
}
