use serde::{Deserialize, Serialize};

/// Metadata for a remotely hosted icon collection.
///
/// Fetched fresh on every catalog query; never persisted locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Display name (e.g., "Material Design Icons").
    pub name: String,
    /// Provider category (e.g., "General"). The remote may omit it.
    #[serde(default)]
    pub category: Option<String>,
    /// Number of icons in the collection.
    #[serde(default)]
    pub total: u64,
}

impl Collection {
    pub fn new(name: impl Into<String>, category: Option<&str>, total: u64) -> Self {
        Self {
            name: name.into(),
            category: category.map(Into::into),
            total,
        }
    }

    /// Category with the fallback used for display purposes.
    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or("Uncategorized")
    }
}
