use serde::{Deserialize, Serialize};

/// One discoverable icon, addressed for the rendering pipeline.
///
/// Records are recomputed on every extraction pass and never persisted
/// outside the discovery cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRecord {
    /// Derived identifier, "{pack_id}:{icon_id}".
    pub id: String,
    /// Fully qualified download URL for the icon's source markup.
    pub source: String,
}

impl IconRecord {
    pub fn new(pack_id: &str, icon_id: &str, source: impl Into<String>) -> Self {
        Self {
            id: Self::derive_id(pack_id, icon_id),
            source: source.into(),
        }
    }

    /// Derive a record id from the pack id and the icon id.
    pub fn derive_id(pack_id: &str, icon_id: &str) -> String {
        format!("{pack_id}:{icon_id}")
    }
}
