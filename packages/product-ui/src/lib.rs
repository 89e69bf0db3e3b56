//! A product carousel for the web, built with Dioxus.
//!
//! [`ProductList`] fetches the catalog from [`PRODUCTS_ENDPOINT`] when it mounts and renders one
//! card per product. Each card shows the product image in the selected color, the price, color
//! swatches and a star rating. [`ProductCarousel`] is the same view over a product list you
//! already have.

mod components;
mod fetch;
mod viewport;

pub use components::*;
pub use fetch::*;
pub use viewport::*;
