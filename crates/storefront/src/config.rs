//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOREFRONT_CATALOG_PATH` - JSON catalog fixture to load instead of the bundled one
//! - `STOREFRONT_PLACEHOLDER_SIZE` - Size label for products without sizes (default: Standard)
//! - `STOREFRONT_MAILBOX_CAPACITY` - Session mailbox capacity (default: 32)

use std::path::PathBuf;

use thiserror::Error;
use tracing::warn;

use crate::catalog::{BundledCatalog, CatalogSource, JsonFileCatalog};

pub const DEFAULT_PLACEHOLDER_SIZE: &str = "Standard";
pub const DEFAULT_MAILBOX_CAPACITY: usize = 32;

const CATALOG_PATH_VAR: &str = "STOREFRONT_CATALOG_PATH";
const PLACEHOLDER_SIZE_VAR: &str = "STOREFRONT_PLACEHOLDER_SIZE";
const MAILBOX_CAPACITY_VAR: &str = "STOREFRONT_MAILBOX_CAPACITY";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Catalog fixture file; the bundled catalog when `None`
    pub catalog_path: Option<PathBuf>,
    /// Size recorded on cart entries for products that declare no sizes
    pub placeholder_size: String,
    /// Number of pending intents the session accepts before senders wait
    pub mailbox_capacity: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            placeholder_size: DEFAULT_PLACEHOLDER_SIZE.to_string(),
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns the value of a variable if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let catalog_path = lookup(CATALOG_PATH_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let placeholder_size =
            lookup(PLACEHOLDER_SIZE_VAR).unwrap_or_else(|| DEFAULT_PLACEHOLDER_SIZE.to_string());
        if placeholder_size.is_empty() {
            warn!(
                var = PLACEHOLDER_SIZE_VAR,
                "Empty placeholder size, unsized products cannot be added"
            );
        }

        let mailbox_capacity = match lookup(MAILBOX_CAPACITY_VAR) {
            Some(raw) => parse_capacity(MAILBOX_CAPACITY_VAR, &raw)?,
            None => DEFAULT_MAILBOX_CAPACITY,
        };

        Ok(Self {
            catalog_path,
            placeholder_size,
            mailbox_capacity,
        })
    }

    /// The catalog source this configuration selects.
    pub fn catalog_source(&self) -> Box<dyn CatalogSource> {
        match &self.catalog_path {
            Some(path) => Box::new(JsonFileCatalog::new(path)),
            None => Box::new(BundledCatalog),
        }
    }
}

fn parse_capacity(key: &str, raw: &str) -> Result<usize, ConfigError> {
    let capacity: usize = raw
        .trim()
        .parse()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), format!("{e}")))?;
    if capacity == 0 {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must be greater than zero".to_string(),
        ));
    }
    Ok(capacity)
}
