use std::collections::HashMap;
use std::sync::Arc;

use crate::client::CollectionCatalog;
use crate::extractor::{Extract, IconifyExtractor};

/// Factory producing an extractor bound to a pack id and a catalog.
pub type ExtractorFactory<C> = Arc<dyn Fn(&str, Arc<C>) -> Box<dyn Extract> + Send + Sync>;

/// Registry mapping extractor-kind strings to factories.
///
/// Populated once at process start. Looking up an unknown kind returns
/// `None` rather than panicking.
pub struct ExtractorRegistry<C: CollectionCatalog> {
    factories: HashMap<String, ExtractorFactory<C>>,
}

impl<C: CollectionCatalog + 'static> ExtractorRegistry<C> {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    pub fn register(&mut self, kind: impl Into<String>, factory: ExtractorFactory<C>) {
        self.factories.insert(kind.into(), factory);
    }

    /// Build an extractor of the given kind for a pack.
    pub fn create(&self, kind: &str, pack_id: &str, catalog: Arc<C>) -> Option<Box<dyn Extract>> {
        self.factories.get(kind).map(|factory| factory(pack_id, catalog))
    }

    pub fn kinds(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }
}

impl<C: CollectionCatalog + 'static> Default for ExtractorRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry with the built-in extractors registered.
pub fn default_registry<C: CollectionCatalog + 'static>() -> ExtractorRegistry<C> {
    let mut registry = ExtractorRegistry::new();
    registry.register(
        "iconify",
        Arc::new(|pack_id: &str, catalog: Arc<C>| {
            Box::new(IconifyExtractor::new(pack_id, catalog)) as Box<dyn Extract>
        }),
    );
    registry
}
