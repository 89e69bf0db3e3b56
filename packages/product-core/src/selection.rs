use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::Product;

/// Color shown for a product that has no images at all.
pub const FALLBACK_COLOR: &str = "yellow";

/// Swatch color for color keys that have no known tint.
pub const UNKNOWN_SWATCH: &str = "#ccc";

/// Identifies a product across renders.
///
/// Prefers the upstream id, then the display name, then the product's position in the list.
/// Products that share a name also share a key; see [`duplicate_names`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProductKey {
    /// Upstream identifier.
    Id(String),
    /// Display name.
    Name(String),
    /// Position in the fetched list.
    Position(usize),
}

impl ProductKey {
    /// The key for the product at `index` in the list.
    pub fn for_product(product: &Product, index: usize) -> Self {
        if let Some(id) = product.id.as_deref().filter(|id| !id.is_empty()) {
            return ProductKey::Id(id.to_string());
        }

        match product.name.as_deref() {
            Some(name) if !name.is_empty() => ProductKey::Name(name.to_string()),
            _ => ProductKey::Position(index),
        }
    }
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductKey::Id(id) => write!(f, "id:{id}"),
            ProductKey::Name(name) => write!(f, "name:{name}"),
            ProductKey::Position(index) => write!(f, "product-{index}"),
        }
    }
}

/// Colors the user picked, per product. Entries are only ever added or replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorSelections {
    selected: HashMap<ProductKey, String>,
}

impl ColorSelections {
    /// Remember `color` for `key`, replacing any earlier pick.
    ///
    /// The color is not checked against the product's images.
    pub fn select(&mut self, key: ProductKey, color: impl Into<String>) {
        self.selected.insert(key, color.into());
    }

    /// The color picked for `key`, if any.
    pub fn selected(&self, key: &ProductKey) -> Option<&str> {
        self.selected.get(key).map(String::as_str)
    }

    /// The color a card shows: the user's pick, else the first image color, else [`FALLBACK_COLOR`].
    pub fn display_color<'a>(&'a self, key: &ProductKey, product: &'a Product) -> &'a str {
        self.selected(key)
            .or_else(|| product.colors().next())
            .unwrap_or(FALLBACK_COLOR)
    }

    /// Number of products with a remembered pick.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether no color has been picked yet.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Names used by more than one id-less product, in first-seen order.
///
/// Such products resolve to the same [`ProductKey`] and would share their color selection.
pub fn duplicate_names(products: &[Product]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();

    for (index, product) in products.iter().enumerate() {
        if let ProductKey::Name(_) = ProductKey::for_product(product, index) {
            let name = product.name.as_deref().unwrap_or_default();
            if !seen.insert(name) && !duplicates.contains(&name) {
                duplicates.push(name);
            }
        }
    }

    duplicates
}

/// Background color of the swatch button for `color`.
pub fn swatch_hex(color: &str) -> &'static str {
    match color {
        "yellow" | "gold" => "#E6CA97",
        "white" | "silver" => "#D9D9D9",
        "rose" => "#E1A4A9",
        _ => UNKNOWN_SWATCH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode_product_list;
    use pretty_assertions::assert_eq;

    fn catalog() -> Vec<Product> {
        decode_product_list(
            br#"[
                {"name":"Ring A","images":{"gold":"g.jpg","silver":"s.jpg"}},
                {"name":"Ring B"},
                {"id":"sku-9","name":"Ring A","images":{"rose":"r.jpg"}},
                {"images":{"white":"w.jpg"}},
                {"name":"Ring A"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn keys_prefer_ids_then_names_then_positions() {
        let products = catalog();
        let keys: Vec<_> = products
            .iter()
            .enumerate()
            .map(|(index, product)| ProductKey::for_product(product, index))
            .collect();

        assert_eq!(
            keys,
            [
                ProductKey::Name("Ring A".into()),
                ProductKey::Name("Ring B".into()),
                ProductKey::Id("sku-9".into()),
                ProductKey::Position(3),
                ProductKey::Name("Ring A".into()),
            ]
        );
        assert_eq!(keys[3].to_string(), "product-3");
    }

    #[test]
    fn defaults_to_first_color_then_yellow() {
        let products = catalog();
        let selections = ColorSelections::default();

        let ring_a = ProductKey::for_product(&products[0], 0);
        let ring_b = ProductKey::for_product(&products[1], 1);
        assert_eq!(selections.display_color(&ring_a, &products[0]), "gold");
        assert_eq!(selections.display_color(&ring_b, &products[1]), "yellow");
    }

    #[test]
    fn default_color_is_the_first_key_as_sent() {
        let products = decode_product_list(
            br#"[{"name":"Ring","images":{"yellow":"y.jpg","rose":"r.jpg","white":"w.jpg"}}]"#,
        )
        .unwrap();
        let key = ProductKey::for_product(&products[0], 0);

        let selections = ColorSelections::default();

        let color = selections.display_color(&key, &products[0]);
        assert_eq!(color, "yellow");
        assert_eq!(products[0].image_for(color), Some("y.jpg"));
    }

    #[test]
    fn picks_replace_earlier_picks() {
        let products = catalog();
        let mut selections = ColorSelections::default();
        let key = ProductKey::for_product(&products[0], 0);

        selections.select(key.clone(), "silver");
        assert_eq!(selections.display_color(&key, &products[0]), "silver");

        selections.select(key.clone(), "gold");
        assert_eq!(selections.display_color(&key, &products[0]), "gold");
        assert_eq!(selections.len(), 1);
    }

    #[test]
    fn picks_are_not_validated() {
        let products = catalog();
        let mut selections = ColorSelections::default();
        let key = ProductKey::for_product(&products[1], 1);

        selections.select(key.clone(), "platinum");
        assert_eq!(selections.display_color(&key, &products[1]), "platinum");
        assert_eq!(products[1].image_for("platinum"), None);
    }

    #[test]
    fn reports_shared_names() {
        let products = catalog();
        assert_eq!(duplicate_names(&products), ["Ring A"]);
        assert!(duplicate_names(&products[..2]).is_empty());
    }

    #[test]
    fn swatch_colors() {
        assert_eq!(swatch_hex("gold"), "#E6CA97");
        assert_eq!(swatch_hex("yellow"), "#E6CA97");
        assert_eq!(swatch_hex("silver"), "#D9D9D9");
        assert_eq!(swatch_hex("rose"), "#E1A4A9");
        assert_eq!(swatch_hex("obsidian"), "#ccc");
    }
}
