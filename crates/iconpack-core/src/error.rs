use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Pack configuration error: {0}")]
    Config(#[from] PackConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Failure talking to the remote catalog service.
#[derive(Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("Request to catalog service failed: {0}")]
    Transport(String),

    #[error("Catalog service returned HTTP {0}")]
    Status(u16),

    #[error("Invalid catalog response: {0}")]
    Decode(String),
}

/// A misconfigured icon pack. Fatal for the extraction pass that hits it,
/// unlike an empty selection which is valid and yields zero records.
#[derive(Error, Debug, PartialEq)]
pub enum PackConfigError {
    #[error("Missing collections selection for pack {0}: the extractor requires this value")]
    MissingCollections(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),
}
