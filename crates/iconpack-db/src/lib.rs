//! Iconpack DB - redb implementation of the selection store.

pub mod selection_store;
pub mod tables;

pub use selection_store::RedbSelectionStore;

use std::path::Path;
use std::sync::Arc;

use redb::Database;

use iconpack_core::StorageError;

/// Initialize a database with all required tables.
pub fn init_database(path: impl AsRef<Path>) -> Result<Arc<Database>, StorageError> {
    let db = Database::create(path).map_err(|e| StorageError::Database(e.to_string()))?;

    RedbSelectionStore::init_tables(&db)?;

    Ok(Arc::new(db))
}
