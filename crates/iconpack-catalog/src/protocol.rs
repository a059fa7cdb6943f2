use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use iconpack_core::Collection;

/// Response from `GET /collections`: mapping from collection prefix to its
/// metadata, in the order the remote reports. Unknown fields on each entry
/// are ignored.
pub type CollectionsResponse = IndexMap<String, Collection>;

/// Response from `GET /collection?prefix={id}`.
///
/// The icon arrays come from an untrusted remote, so entries are decoded
/// leniently: anything that is not a string is dropped at this boundary
/// rather than failing the whole response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollectionIcons {
    #[serde(default)]
    pub uncategorized: Vec<Value>,
    #[serde(default)]
    pub categories: IndexMap<String, Vec<Value>>,
}

impl CollectionIcons {
    /// Flatten the uncategorized and categorized lists into icon ids,
    /// skipping non-string entries.
    pub fn icon_ids(&self) -> Vec<String> {
        let mut ids = Vec::new();
        for value in self
            .uncategorized
            .iter()
            .chain(self.categories.values().flatten())
        {
            match value.as_str() {
                Some(id) => ids.push(id.to_string()),
                None => tracing::debug!("Skipping non-string icon id entry: {value}"),
            }
        }
        ids
    }
}
