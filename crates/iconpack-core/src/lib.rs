//! Iconpack Core - Domain models, errors, and storage traits.
//!
//! This crate contains the core domain logic for the iconpack icon
//! provider. It has no dependencies on other iconpack crates.

pub mod cache;
pub mod collection;
pub mod error;
pub mod icon;
pub mod selection;
pub mod storage;

// Re-exports for convenience
pub use cache::{DiscoveryCache, InMemoryDiscoveryCache};
pub use collection::Collection;
pub use error::{CatalogError, CoreError, PackConfigError, StorageError};
pub use icon::IconRecord;
pub use selection::CollectionSelection;
pub use storage::SelectionStore;

#[cfg(any(test, feature = "test-utils"))]
pub use storage::memory::InMemorySelectionStore;
