//! The product list service.
//!
//! `GET /products` returns the catalog with every product priced from the current gold price:
//! `(popularityScore + 1) * weight * goldPricePerGram`, rounded to cents. When the gold price
//! cannot be fetched a fixed fallback price is used instead.

pub mod catalog;
pub mod config;
pub mod error;
pub mod gold;
pub mod pricing;
pub mod routes;

pub use catalog::CatalogSource;
pub use config::ServerConfig;
pub use error::{ApiError, Result};
pub use gold::{FixedGoldPrice, GoldApi, GoldPriceError, GoldPriceSource};
pub use routes::{router, AppState};
