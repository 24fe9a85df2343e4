//! Decorator registry

use super::relative_links::FolderRelativeLinksDecoratorFactory;
use super::types::{KmlDecorator, KmlDecoratorFactory, KmlEncodingContext};
use crate::error::Result;
use crate::kml::{Feature, FeatureKind};

/// Ordered set of decorator factories
pub struct DecoratorRegistry {
    factories: Vec<Box<dyn KmlDecoratorFactory>>,
}

impl Default for DecoratorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl DecoratorRegistry {
    /// Registry without any factory
    pub fn empty() -> Self {
        Self {
            factories: Vec::new(),
        }
    }

    /// Registry with the built-in factories
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(FolderRelativeLinksDecoratorFactory);
        registry
    }

    /// Append a factory; decorators run in registration order
    pub fn register(&mut self, factory: impl KmlDecoratorFactory + 'static) {
        self.factories.push(Box::new(factory));
    }

    /// Number of registered factories
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Check if no factory is registered
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Decorators applying to nodes of `kind` under this request.
    ///
    /// Resolve once per kind and reuse the result for every node of that kind.
    pub fn decorators_for(
        &self,
        kind: FeatureKind,
        ctx: &KmlEncodingContext,
    ) -> Vec<Box<dyn KmlDecorator>> {
        self.factories
            .iter()
            .filter_map(|f| f.decorator(kind, ctx))
            .collect()
    }

    /// Run every applicable decorator on `feature`
    pub fn decorate(&self, feature: &mut Feature, ctx: &KmlEncodingContext) -> Result<()> {
        for decorator in self.decorators_for(feature.kind(), ctx) {
            decorator.decorate(feature, ctx)?;
        }
        Ok(())
    }
}
