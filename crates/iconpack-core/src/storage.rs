use crate::error::StorageError;
use crate::selection::CollectionSelection;

/// Trait for persisting the collection selection of an icon pack.
///
/// `get` returning `None` means no selection record exists for the pack,
/// which is distinct from a stored empty selection. Extraction treats the
/// former as a configuration error and the latter as zero icons.
pub trait SelectionStore: Send + Sync {
    /// Get the stored selection for a pack.
    fn get(&self, pack_id: &str) -> Result<Option<CollectionSelection>, StorageError>;

    /// Save the selection for a pack, overwriting any previous record.
    fn save(&self, pack_id: &str, selection: &CollectionSelection) -> Result<(), StorageError>;
}

// In-memory implementation for testing
#[cfg(any(test, feature = "test-utils"))]
pub mod memory {
    use std::collections::HashMap;
    use std::sync::RwLock;

    use super::*;

    /// In-memory selection store for testing.
    #[derive(Default)]
    pub struct InMemorySelectionStore {
        selections: RwLock<HashMap<String, CollectionSelection>>,
    }

    impl InMemorySelectionStore {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl SelectionStore for InMemorySelectionStore {
        fn get(&self, pack_id: &str) -> Result<Option<CollectionSelection>, StorageError> {
            Ok(self.selections.read().unwrap().get(pack_id).cloned())
        }

        fn save(
            &self,
            pack_id: &str,
            selection: &CollectionSelection,
        ) -> Result<(), StorageError> {
            self.selections
                .write()
                .unwrap()
                .insert(pack_id.to_string(), selection.clone());
            Ok(())
        }
    }

}
