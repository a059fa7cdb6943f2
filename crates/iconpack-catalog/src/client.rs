use indexmap::IndexMap;

use iconpack_core::{CatalogError, Collection};

use crate::protocol::{CollectionIcons, CollectionsResponse};

/// Default base URL of the catalog service.
pub const DEFAULT_CATALOG_URL: &str = "https://api.iconify.design";

/// Trait for querying the remote icon catalog service.
///
/// Results are not cached here; callers own any caching.
pub trait CollectionCatalog: Send + Sync {
    /// List the available collections, keyed by prefix, in the order the
    /// remote reports them.
    fn list_collections(
        &self,
    ) -> impl std::future::Future<Output = Result<IndexMap<String, Collection>, CatalogError>> + Send;

    /// List the icon ids of a collection. A collection that yields no
    /// icons, or that no longer exists remotely, produces an empty list
    /// rather than an error.
    fn list_icon_ids(
        &self,
        collection_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<String>, CatalogError>> + Send;
}

/// HTTP client for the catalog service.
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for HttpCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_URL)
    }
}

impl CollectionCatalog for HttpCatalog {
    async fn list_collections(&self) -> Result<IndexMap<String, Collection>, CatalogError> {
        let url = format!("{}/collections", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status().as_u16()));
        }

        let collections: CollectionsResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))?;

        Ok(collections)
    }

    async fn list_icon_ids(&self, collection_id: &str) -> Result<Vec<String>, CatalogError> {
        let url = format!("{}/collection?prefix={}", self.base_url, collection_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        // The remote answers 404 for a prefix it no longer hosts. A stale
        // selection entry contributes zero icons, not an error.
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!("Collection {collection_id} not found in catalog");
            return Ok(Vec::new());
        }

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status().as_u16()));
        }

        let icons: CollectionIcons = response
            .json()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))?;

        Ok(icons.icon_ids())
    }
}
