//! Startup catalog loading from a static JSON product list.

use std::path::Path;

use thiserror::Error;

use storefront_core::DomainError;

use crate::catalog::Catalog;
use crate::product::Product;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog data: {0}")]
    Invalid(#[from] DomainError),
}

/// Parse a JSON array of `{id, name, price, quantity}` records into a catalog.
pub fn parse_catalog(json: &str) -> Result<Catalog, LoadError> {
    let products: Vec<Product> = serde_json::from_str(json)?;
    Ok(Catalog::from_products(products)?)
}

/// Read and parse the catalog file at `path`.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, LoadError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let catalog = parse_catalog(&json)?;
    tracing::info!(
        path = %path.display(),
        products = catalog.len(),
        available = catalog.available_count(),
        "catalog loaded"
    );
    Ok(catalog)
}
