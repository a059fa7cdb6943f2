//! Iconpack Catalog - Remote catalog client and icon extraction.

pub mod client;
pub mod extractor;
pub mod protocol;
pub mod registry;

pub use client::{CollectionCatalog, HttpCatalog, DEFAULT_CATALOG_URL};
pub use extractor::{Extract, ExtractError, IconifyExtractor};
pub use registry::{default_registry, ExtractorFactory, ExtractorRegistry};
