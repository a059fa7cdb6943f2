use std::sync::Arc;

use redb::Database;

use iconpack_core::{CollectionSelection, SelectionStore, StorageError};

use crate::tables::SELECTIONS_TABLE;

/// redb implementation of SelectionStore.
///
/// Each pack id maps to a single configuration record holding its
/// collection selection. Absence of the record is preserved: `get` only
/// returns `Some` once a selection has been saved, even an empty one.
pub struct RedbSelectionStore {
    db: Arc<Database>,
}

impl RedbSelectionStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Initialize the database tables.
    pub fn init_tables(db: &Database) -> Result<(), StorageError> {
        let write_txn = db
            .begin_write()
            .map_err(|e| StorageError::Database(e.to_string()))?;
        {
            let _ = write_txn
                .open_table(SELECTIONS_TABLE)
                .map_err(|e| StorageError::Database(e.to_string()))?;
        }
        write_txn
            .commit()
            .map_err(|e| StorageError::Database(e.to_string()))?;
        Ok(())
    }
}

impl SelectionStore for RedbSelectionStore {
    fn get(&self, pack_id: &str) -> Result<Option<CollectionSelection>, StorageError> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| StorageError::Database(e.to_string()))?;

        let table = read_txn
            .open_table(SELECTIONS_TABLE)
            .map_err(|e| StorageError::Database(e.to_string()))?;

        match table
            .get(pack_id)
            .map_err(|e| StorageError::Database(e.to_string()))?
        {
            Some(value) => {
                let selection: CollectionSelection = serde_json::from_slice(value.value())
                    .map_err(|e| StorageError::Database(e.to_string()))?;
                Ok(Some(selection))
            }
            None => Ok(None),
        }
    }

    fn save(&self, pack_id: &str, selection: &CollectionSelection) -> Result<(), StorageError> {
        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| StorageError::Database(e.to_string()))?;

        {
            let mut table = write_txn
                .open_table(SELECTIONS_TABLE)
                .map_err(|e| StorageError::Database(e.to_string()))?;

            let value = serde_json::to_vec(selection)
                .map_err(|e| StorageError::Database(e.to_string()))?;

            table
                .insert(pack_id, value.as_slice())
                .map_err(|e| StorageError::Database(e.to_string()))?;
        }

        write_txn
            .commit()
            .map_err(|e| StorageError::Database(e.to_string()))?;

        Ok(())
    }
}
