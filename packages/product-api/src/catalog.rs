use std::path::PathBuf;

use product_core::{decode_product_list, Product};

use crate::Result;

/// The catalog that ships with the service.
pub const BUILTIN_CATALOG: &str = include_str!("../assets/products.json");

/// Where the unpriced catalog comes from.
///
/// The catalog is read on every request, so edits to a catalog file show up without a restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// A catalog compiled into the binary.
    Static(&'static str),
    /// A JSON file on disk.
    File(PathBuf),
}

impl Default for CatalogSource {
    fn default() -> Self {
        CatalogSource::Static(BUILTIN_CATALOG)
    }
}

impl CatalogSource {
    pub async fn load(&self) -> Result<Vec<Product>> {
        let products = match self {
            CatalogSource::Static(json) => decode_product_list(json.as_bytes())?,
            CatalogSource::File(path) => decode_product_list(&tokio::fs::read(path).await?)?,
        };

        tracing::debug!(count = products.len(), source = ?self, "loaded catalog");
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn builtin_catalog_decodes() {
        let products = CatalogSource::default().load().await.unwrap();
        assert!(!products.is_empty());
        assert!(products
            .iter()
            .all(|product| product.name.is_some() && product.weight.is_some()));
    }

    #[tokio::test]
    async fn builtin_rings_list_yellow_first() {
        let products = CatalogSource::default().load().await.unwrap();
        assert!(products
            .iter()
            .all(|product| product.colors().next() == Some("yellow")));
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let source = CatalogSource::File("/definitely/not/here/products.json".into());
        assert!(source.load().await.is_err());
    }
}
