use indexmap::IndexMap;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::CatalogError;

/// A product as sent by the product list endpoint.
///
/// Every field is optional on the wire. `price` and `popularity_score` keep the raw JSON value
/// so the display helpers can decide how to coerce them; see [`crate::compute_price`] and
/// [`crate::compute_rating`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable identifier, when upstream provides one.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_string"
    )]
    pub id: Option<String>,

    /// Display name.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_string"
    )]
    pub name: Option<String>,

    /// Price in USD: a number, a numeric string, or anything else (shown as unavailable).
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub price: Value,

    /// Popularity either as a fraction in `0..=1` or as a percentage.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub popularity_score: Value,

    /// Weight in grams.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_number"
    )]
    pub weight: Option<f64>,

    /// Rating on the 0-5 scale, filled in by the product API.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_number"
    )]
    pub popularity_rating: Option<f64>,

    /// Image URL per color key, in upstream order.
    #[serde(default, deserialize_with = "lenient_images")]
    pub images: IndexMap<String, String>,
}

impl Product {
    /// The name shown on the card, or `product-<index>` when the product has none.
    pub fn label(&self, index: usize) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("product-{index}"),
        }
    }

    /// Color keys in the order upstream listed them.
    pub fn colors(&self) -> impl Iterator<Item = &str> + '_ {
        self.images.keys().map(String::as_str)
    }

    /// The image URL for `color`, skipping empty URLs.
    pub fn image_for(&self, color: &str) -> Option<&str> {
        self.images
            .get(color)
            .map(String::as_str)
            .filter(|url| !url.is_empty())
    }

    /// The popularity score coerced to a number. Anything unparseable counts as zero.
    pub fn popularity(&self) -> f64 {
        match &self.popularity_score {
            Value::Bool(true) => 1.0,
            other => coerce_number(other).unwrap_or(0.0),
        }
    }
}

/// Decode a product list response body.
///
/// An empty body and JSON `null` both decode to an empty list.
pub fn decode_product_list(body: &[u8]) -> Result<Vec<Product>, CatalogError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let products: Option<Vec<Product>> = serde_json::from_slice(body)?;
    Ok(products.unwrap_or_default())
}

/// Coerce a JSON value into a finite number.
///
/// Numbers pass through; strings are trimmed and parsed. Empty strings, booleans, arrays,
/// objects, null and non-finite results are rejected.
pub fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            text.parse::<f64>().ok()?
        }
        _ => return None,
    };

    number.is_finite().then_some(number)
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(coerce_number(&Value::deserialize(deserializer)?))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawImages {
    Map(IndexMap<String, Value>),
    Other(IgnoredAny),
}

// Decoded straight into an IndexMap so color keys keep upstream order.
// Non-string URLs keep their color key but render as a missing image.
fn lenient_images<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<IndexMap<String, String>, D::Error> {
    let images = match RawImages::deserialize(deserializer)? {
        RawImages::Map(map) => map,
        RawImages::Other(_) => return Ok(IndexMap::new()),
    };

    Ok(images
        .into_iter()
        .map(|(color, url)| match url {
            Value::String(url) => (color, url),
            _ => (color, String::new()),
        })
        .collect())
}
