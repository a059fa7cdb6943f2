use std::net::SocketAddr;
use std::path::PathBuf;

use iconpack_catalog::DEFAULT_CATALOG_URL;

/// Server configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Id of the icon pack this server manages (the configuration record
    /// key and the prefix of derived icon ids).
    pub pack_id: String,
    /// Extractor kind to resolve from the registry.
    pub extractor_kind: String,
    pub listen_addr: SocketAddr,
    pub db_path: PathBuf,
    pub catalog_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let pack_id =
            std::env::var("ICONPACK_PACK_ID").map_err(|_| ConfigError::Missing("ICONPACK_PACK_ID"))?;
        if pack_id.trim().is_empty() {
            return Err(ConfigError::Invalid("ICONPACK_PACK_ID", "must not be empty"));
        }

        let extractor_kind =
            std::env::var("ICONPACK_EXTRACTOR").unwrap_or_else(|_| "iconify".to_string());

        let listen_addr = std::env::var("ICONPACK_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .map_err(|_| {
                ConfigError::Invalid("ICONPACK_LISTEN_ADDR", "must be a valid socket address")
            })?;

        let db_path = std::env::var("ICONPACK_DB_PATH")
            .unwrap_or_else(|_| "./iconpack.redb".to_string())
            .into();

        let catalog_url = std::env::var("ICONPACK_CATALOG_URL")
            .unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string());

        Ok(Config {
            pack_id,
            extractor_kind,
            listen_addr,
            db_path,
            catalog_url,
        })
    }

    /// Create a test configuration.
    #[cfg(test)]
    pub fn for_testing() -> Self {
        Config {
            pack_id: "iconify".to_string(),
            extractor_kind: "iconify".to_string(),
            listen_addr: "127.0.0.1:0".parse().unwrap(),
            db_path: PathBuf::from("/tmp/iconpack-test.redb"),
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str, &'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(var) => {
                write!(f, "Missing required environment variable: {}", var)
            }
            ConfigError::Invalid(var, msg) => write!(f, "Invalid value for {}: {}", var, msg),
        }
    }
}

impl std::error::Error for ConfigError {}
