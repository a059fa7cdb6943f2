use std::sync::Arc;

use iconpack_catalog::{CollectionCatalog, ExtractorRegistry};
use iconpack_core::InMemoryDiscoveryCache;
use iconpack_db::RedbSelectionStore;

/// Application state shared across handlers.
///
/// Generic over the catalog implementation so integration tests can inject
/// a mock instead of the live HTTP client.
pub struct AppState<C: CollectionCatalog> {
    pub pack_id: String,
    pub extractor_kind: String,
    pub selection_store: Arc<RedbSelectionStore>,
    pub catalog: Arc<C>,
    pub registry: Arc<ExtractorRegistry<C>>,
    pub cache: Arc<InMemoryDiscoveryCache>,
}

impl<C: CollectionCatalog + 'static> AppState<C> {
    pub fn new(
        pack_id: impl Into<String>,
        extractor_kind: impl Into<String>,
        selection_store: Arc<RedbSelectionStore>,
        catalog: Arc<C>,
        registry: Arc<ExtractorRegistry<C>>,
    ) -> Self {
        Self {
            pack_id: pack_id.into(),
            extractor_kind: extractor_kind.into(),
            selection_store,
            catalog,
            registry,
            cache: Arc::new(InMemoryDiscoveryCache::new()),
        }
    }
}

// Manual Clone: deriving would require C: Clone, which Arc makes unnecessary.
impl<C: CollectionCatalog> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            pack_id: self.pack_id.clone(),
            extractor_kind: self.extractor_kind.clone(),
            selection_store: self.selection_store.clone(),
            catalog: self.catalog.clone(),
            registry: self.registry.clone(),
            cache: self.cache.clone(),
        }
    }
}
