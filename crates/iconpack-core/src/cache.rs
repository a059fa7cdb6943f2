use std::collections::HashMap;
use std::sync::RwLock;

use crate::icon::IconRecord;

/// Cache for extraction results, keyed by pack id.
///
/// Invalidation is an explicit call against this interface: saving a new
/// collection selection invalidates the affected pack's entry.
pub trait DiscoveryCache: Send + Sync {
    /// Get the cached records for a pack, if any.
    fn get(&self, pack_id: &str) -> Option<Vec<IconRecord>>;

    /// Store the records for a pack, replacing any previous entry.
    fn put(&self, pack_id: &str, records: Vec<IconRecord>);

    /// Drop the entry for a pack. A miss is not an error.
    fn invalidate(&self, pack_id: &str);
}

/// RwLock-backed cache, suitable for a single-process server.
#[derive(Default)]
pub struct InMemoryDiscoveryCache {
    entries: RwLock<HashMap<String, Vec<IconRecord>>>,
}

impl InMemoryDiscoveryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiscoveryCache for InMemoryDiscoveryCache {
    fn get(&self, pack_id: &str) -> Option<Vec<IconRecord>> {
        self.entries.read().unwrap().get(pack_id).cloned()
    }

    fn put(&self, pack_id: &str, records: Vec<IconRecord>) {
        self.entries
            .write()
            .unwrap()
            .insert(pack_id.to_string(), records);
    }

    fn invalidate(&self, pack_id: &str) {
        self.entries.write().unwrap().remove(pack_id);
    }
}
