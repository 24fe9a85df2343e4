//! CLI runner - executes commands

use crate::catalog::{Catalog, InMemoryCatalog};
use crate::cli::commands::{Cli, Commands, DocumentFormat};
use crate::config::{load_settings, ServiceSettings};
use crate::decorator::{
    DecoratorRegistry, FeatureCollectionInfo, GetMapRequest, KmlEncodingContext, REL_LINKS_OPTION,
};
use crate::error::{Error, Result};
use crate::kml::{render_layer_page, to_kml_string};
use crate::openapi::{ApiTemplate, BaseRequest, OpenApiBuilder};
use std::path::Path;
use std::sync::Arc;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Api { format, template } => self.api(*format, template.as_deref()),
            Commands::PageLinks {
                layer,
                start_index,
                max_features,
                no_rel_links,
            } => self.page_links(layer, *start_index, *max_features, !*no_rel_links),
            Commands::Validate => self.validate(),
            Commands::Serve { port } => {
                let config = crate::cli::ServerConfig {
                    base_url: self.cli.base_url.clone(),
                    settings: self.load_settings()?,
                };
                crate::cli::serve(config, *port).await
            }
        }
    }

    /// Load settings, falling back to defaults when no file is given
    fn load_settings(&self) -> Result<ServiceSettings> {
        match &self.cli.settings {
            Some(path) => load_settings(path),
            None => {
                tracing::debug!("No settings file given, using defaults");
                Ok(ServiceSettings::default())
            }
        }
    }

    /// Print the API description
    fn api(&self, format: DocumentFormat, template: Option<&Path>) -> Result<()> {
        let settings = self.load_settings()?;
        let request = BaseRequest::new(&self.cli.base_url);

        let custom;
        let template = match template {
            Some(path) => {
                custom = ApiTemplate::load(path)?;
                &custom
            }
            None => ApiTemplate::builtin()?,
        };

        let api = OpenApiBuilder::new(template).build(&request, &settings, &settings.formats)?;
        let output = match format {
            DocumentFormat::Json => api.to_json()?,
            DocumentFormat::Yaml => api.to_yaml()?,
        };
        println!("{output}");
        Ok(())
    }

    /// Print one decorated page of a layer
    fn page_links(
        &self,
        layer: &str,
        start_index: u32,
        max_features: Option<u32>,
        rel_links: bool,
    ) -> Result<()> {
        let settings = self.load_settings()?;
        let catalog = InMemoryCatalog::from_settings(&settings)?;

        let (prefix, name) = layer
            .split_once(':')
            .ok_or_else(|| Error::config(format!("Layer '{layer}' must be given as prefix:name")))?;
        let layer = catalog
            .layer(prefix, name)?
            .ok_or_else(|| Error::layer_not_found(prefix, name))?;

        let mut request = GetMapRequest::new(&self.cli.base_url).with_start_index(start_index);
        request.max_features = max_features;
        if rel_links {
            request.set_format_option(REL_LINKS_OPTION, "true");
        }

        let collection =
            FeatureCollectionInfo::page_of(layer.feature_count, start_index, max_features);
        let ctx = KmlEncodingContext::new(request, Arc::new(catalog)).with_layer(layer, collection);

        let kml = to_kml_string(&render_layer_page(&ctx, &DecoratorRegistry::with_defaults())?)?;
        println!("{kml}");
        Ok(())
    }

    /// Validate settings
    fn validate(&self) -> Result<()> {
        let settings = self.load_settings()?;
        let catalog = InMemoryCatalog::from_settings(&settings)?;
        ApiTemplate::builtin()?;

        if self.cli.verbose {
            println!("{}", serde_yaml::to_string(&settings)?);
        }
        println!(
            "Settings are valid: {} namespaces, {} layers",
            settings.namespaces.len(),
            catalog.layer_count()
        );
        Ok(())
    }
}
