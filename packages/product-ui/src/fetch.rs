use dioxus::prelude::*;
use product_core::{decode_product_list, duplicate_names, CatalogError, Product};
use thiserror::Error;
use tracing::{debug, error, warn};

/// Where the product list is fetched from.
pub const PRODUCTS_ENDPOINT: &str = "https://product-list-1dn8.onrender.com/products";

/// Why a product list could not be fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server answered {0}")]
    Status(reqwest::StatusCode),

    #[error(transparent)]
    Decode(#[from] CatalogError),
}

/// Fetch the product list once. An empty or `null` body is an empty list.
pub async fn fetch_products(endpoint: &str) -> Result<Vec<Product>, FetchError> {
    let response = reqwest::get(endpoint).await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let body = response.bytes().await?;
    Ok(decode_product_list(&body)?)
}

/// The fetched product list. Starts empty and is replaced once the fetch on mount succeeds.
///
/// A failed fetch is logged and leaves the list as it was. There is no retry.
pub fn use_products(endpoint: String) -> Signal<Vec<Product>> {
    let mut products = use_signal(Vec::new);

    use_future(move || {
        let endpoint = endpoint.clone();
        async move {
            match fetch_products(&endpoint).await {
                Ok(fetched) => {
                    debug!(count = fetched.len(), "fetched products");
                    for name in duplicate_names(&fetched) {
                        warn!("products share the name {name:?}; their color selection is shared");
                    }
                    products.set(fetched);
                }
                Err(err) => error!("Products fetch error: {err}"),
            }
        }
    });

    products
}
