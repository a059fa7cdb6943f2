use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use indexmap::IndexMap;
use thiserror::Error;

use iconpack_core::{CatalogError, CollectionSelection, IconRecord, PackConfigError};

use crate::client::CollectionCatalog;

/// Template for an icon's download URL, taking the collection id and the
/// icon id.
pub const DOWNLOAD_URL_TEMPLATE: &str = "https://api.iconify.design/{collection}/{icon}.svg";

/// Error type for extraction passes.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error(transparent)]
    Config(#[from] PackConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

fn source_url(collection_id: &str, icon_id: &str) -> String {
    DOWNLOAD_URL_TEMPLATE
        .replace("{collection}", collection_id)
        .replace("{icon}", icon_id)
}

/// Extractor that turns a stored collection selection into addressable
/// icon records by asking the catalog for each collection's icon ids.
pub struct IconifyExtractor<C: CollectionCatalog> {
    pack_id: String,
    catalog: Arc<C>,
}

impl<C: CollectionCatalog> IconifyExtractor<C> {
    pub fn new(pack_id: impl Into<String>, catalog: Arc<C>) -> Self {
        Self {
            pack_id: pack_id.into(),
            catalog,
        }
    }

    /// Discover the icons for the given selection.
    ///
    /// `None` means no selection record exists for this pack, which is a
    /// configuration error. An empty selection is valid and yields zero
    /// records. Records are keyed by their derived id, so an icon id that
    /// appears in several selected collections produces a single record.
    pub async fn discover(
        &self,
        selection: Option<&CollectionSelection>,
    ) -> Result<Vec<IconRecord>, ExtractError> {
        let selection = selection
            .ok_or_else(|| PackConfigError::MissingCollections(self.pack_id.clone()))?;

        let mut records: IndexMap<String, IconRecord> = IndexMap::new();

        for collection_id in selection.ids() {
            let icon_ids = self.catalog.list_icon_ids(collection_id).await?;
            if icon_ids.is_empty() {
                continue;
            }

            for icon_id in &icon_ids {
                let record =
                    IconRecord::new(&self.pack_id, icon_id, source_url(collection_id, icon_id));
                records.entry(record.id.clone()).or_insert(record);
            }
        }

        tracing::debug!(
            "Discovered {} icons for pack {} from {} collections",
            records.len(),
            self.pack_id,
            selection.len()
        );

        Ok(records.into_values().collect())
    }
}

/// Object-safe view of an extractor, for registry-produced instances.
pub trait Extract: Send + Sync {
    fn discover_icons<'a>(
        &'a self,
        selection: Option<&'a CollectionSelection>,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<IconRecord>, ExtractError>> + Send + 'a>>;
}

impl<C: CollectionCatalog + 'static> Extract for IconifyExtractor<C> {
    fn discover_icons<'a>(
        &'a self,
        selection: Option<&'a CollectionSelection>,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<IconRecord>, ExtractError>> + Send + 'a>> {
        Box::pin(self.discover(selection))
    }
}
