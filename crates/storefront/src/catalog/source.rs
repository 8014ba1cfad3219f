//! # Catalog Sources
//!
//! The product and category lists are an injected dataset: the state logic never knows
//! where they came from. A [`CatalogSource`] produces a validated [`Catalog`], and the
//! binary picks one from configuration.
//!
//! - [`BundledCatalog`] - the fixture compiled into the binary
//! - [`JsonFileCatalog`] - a JSON fixture read from disk at startup

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use super::{Catalog, CatalogError};

const BUNDLED_FIXTURE: &str = include_str!("../../fixtures/catalog.json");

/// Something that can produce the storefront's fixture data.
///
/// This trait is `#[async_trait]` so sources that touch the filesystem can do so without
/// blocking the runtime, and so sources can be boxed (`Box<dyn CatalogSource>`).
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Loads and validates the catalog.
    async fn load(&self) -> Result<Catalog, CatalogError>;
}

/// The twelve products and eight categories shipped with the storefront.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCatalog;

impl BundledCatalog {
    /// Parses the bundled fixture synchronously.
    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        Catalog::from_json(BUNDLED_FIXTURE)
    }
}

#[async_trait]
impl CatalogSource for BundledCatalog {
    async fn load(&self) -> Result<Catalog, CatalogError> {
        let catalog = self.catalog()?;
        info!(
            products = catalog.len(),
            categories = catalog.categories().len(),
            "Loaded bundled catalog"
        );
        Ok(catalog)
    }
}

/// A catalog fixture file with the same shape as the bundled one.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    #[instrument(skip(self))]
    async fn load(&self) -> Result<Catalog, CatalogError> {
        debug!(path = %self.path.display(), "Reading catalog fixture");
        let contents = tokio::fs::read_to_string(&self.path).await?;
        let catalog = Catalog::from_json(&contents)?;
        info!(
            products = catalog.len(),
            categories = catalog.categories().len(),
            "Loaded catalog file"
        );
        Ok(catalog)
    }
}
