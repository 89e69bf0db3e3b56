use product_core::{compute_rating, round_to, Product};
use serde_json::Value;

/// Price of a product in USD, rounded to cents.
///
/// More popular pieces carry a higher markup: `(popularity + 1) * weight * gold_price`.
pub fn product_price(popularity: f64, weight: f64, gold_price: f64) -> f64 {
    round_to((popularity + 1.0) * weight * gold_price, 2)
}

/// Fill in `price` and `popularityRating` for one catalog entry.
///
/// A product without a weight is priced as weighing nothing.
pub fn price_product(mut product: Product, gold_price: f64) -> Product {
    let price = product_price(product.popularity(), product.weight.unwrap_or(0.0), gold_price);
    product.price = Value::from(price);
    product.popularity_rating = Some(compute_rating(&product));
    product
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn popularity_adds_markup() {
        assert_eq!(product_price(0.0, 2.0, 75.0), 150.0);
        assert_eq!(product_price(0.5, 2.0, 80.0), 240.0);
        assert_eq!(product_price(0.1, 1.0, 33.333), 36.67);
        assert_eq!(product_price(0.8, 2.0, 50.0), 180.0);
    }

    #[test]
    fn fills_price_and_rating() {
        let product = Product {
            name: Some("Ring A".into()),
            popularity_score: json!(0.8),
            weight: Some(2.0),
            ..Default::default()
        };

        let priced = price_product(product, 50.0);
        assert_eq!(priced.price, json!(180.0));
        assert_eq!(priced.popularity_rating, Some(4.0));
        assert_eq!(priced.name.as_deref(), Some("Ring A"));
    }

    #[test]
    fn weightless_products_are_free() {
        let priced = price_product(Product::default(), 75.0);
        assert_eq!(priced.price, json!(0.0));
        assert_eq!(priced.popularity_rating, Some(0.0));
    }
}
