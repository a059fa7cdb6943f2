use indexmap::IndexMap;
use serde::Serialize;

use iconpack_core::{Collection, CollectionSelection};

/// Template for a collection's public page, taking the collection id.
pub const COLLECTION_PAGE_URL: &str = "https://icon-sets.iconify.design/{collection}";

/// Serializable description of the settings form.
///
/// Consumers render this however they like; the HTML page and the JSON
/// endpoint both go through it.
#[derive(Debug, Serialize)]
pub struct SettingsFormView {
    pub search: SearchField,
    pub collections: Vec<CheckboxOption>,
}

#[derive(Debug, Serialize)]
pub struct SearchField {
    pub placeholder: &'static str,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CheckboxOption {
    pub id: String,
    pub label: String,
    pub checked: bool,
    pub total: u64,
    /// Link to the collection's public page.
    pub href: String,
}

/// Build the settings form view from the live catalog listing and the
/// currently stored selection.
///
/// Options are sorted by icon count descending; ties keep the order the
/// catalog reported (stable sort over the ordered map).
pub fn render(
    current: Option<&CollectionSelection>,
    available: &IndexMap<String, Collection>,
) -> SettingsFormView {
    let mut collections: Vec<CheckboxOption> = available
        .iter()
        .map(|(id, collection)| CheckboxOption {
            id: id.clone(),
            label: format!(
                "{} - {} ({})",
                collection.name,
                collection.category_or_default(),
                collection.total
            ),
            checked: current.map(|s| s.contains(id)).unwrap_or(false),
            total: collection.total,
            href: COLLECTION_PAGE_URL.replace("{collection}", id),
        })
        .collect();

    collections.sort_by(|a, b| b.total.cmp(&a.total));

    SettingsFormView {
        search: SearchField {
            placeholder: "Filter collections",
        },
        collections,
    }
}
