use thiserror::Error;

/// Errors produced while decoding a product list.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The body was not a JSON array of products.
    #[error("malformed product list: {0}")]
    Decode(#[from] serde_json::Error),
}
