use std::sync::Arc;

use axum::extract::State;
use axum::http::Method;
use axum::routing::get;
use axum::{Json, Router};
use product_core::Product;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::gold::{current_price, GoldPriceSource, FALLBACK_GOLD_PRICE};
use crate::pricing::price_product;
use crate::{CatalogSource, Result};

/// Shared state of the service.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogSource,
    pub gold: Arc<dyn GoldPriceSource>,
    pub fallback_gold_price: f64,
}

impl AppState {
    pub fn new(catalog: CatalogSource, gold: impl GoldPriceSource + 'static) -> Self {
        Self {
            catalog,
            gold: Arc::new(gold),
            fallback_gold_price: FALLBACK_GOLD_PRICE,
        }
    }
}

/// Sets up and returns the router
pub fn router(state: AppState) -> Router {
    // the carousel is served from a different origin
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/products", get(list_products))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = state.catalog.load().await?;
    let gold_price = current_price(state.gold.as_ref(), state.fallback_gold_price).await;

    tracing::info!(count = products.len(), gold_price, "pricing catalog");

    Ok(Json(
        products
            .into_iter()
            .map(|product| price_product(product, gold_price))
            .collect(),
    ))
}
