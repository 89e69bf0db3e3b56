use crate::{coerce_number, Product};

/// Shown in place of a price that is missing or not a number.
pub const PRICE_UNAVAILABLE: &str = "N/A";

/// The product's price with two decimals, or [`PRICE_UNAVAILABLE`].
pub fn compute_price(product: &Product) -> String {
    match coerce_number(&product.price) {
        Some(price) => format!("{price:.2}"),
        None => PRICE_UNAVAILABLE.to_string(),
    }
}

/// The price line of a product card, e.g. `$120.00 USD`.
pub fn price_label(product: &Product) -> String {
    format!("${} USD", compute_price(product))
}
