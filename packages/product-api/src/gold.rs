use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// The gold price endpoint used when no other URL is configured.
pub const GOLD_API_URL: &str = "https://www.goldapi.io/api/XAU/USD";

/// USD per gram used when the live price is unavailable.
pub const FALLBACK_GOLD_PRICE: f64 = 75.0;

#[derive(Debug, Error)]
pub enum GoldPriceError {
    #[error("no gold API key configured")]
    MissingKey,

    #[error("gold price request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("gold price response has no usable `price_gram_24k`")]
    MissingPrice,
}

/// Something that knows the current price of 24k gold, in USD per gram.
#[async_trait]
pub trait GoldPriceSource: Send + Sync {
    async fn price_per_gram(&self) -> Result<f64, GoldPriceError>;
}

/// Ask `source` for the gold price, falling back to `fallback` on any error.
pub async fn current_price(source: &dyn GoldPriceSource, fallback: f64) -> f64 {
    match source.price_per_gram().await {
        Ok(price) => price,
        Err(err) => {
            tracing::warn!("using fallback gold price {fallback}: {err}");
            fallback
        }
    }
}

/// The goldapi.io spot price.
#[derive(Debug, Clone)]
pub struct GoldApi {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl GoldApi {
    pub fn new(url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            api_key,
        }
    }
}

#[async_trait]
impl GoldPriceSource for GoldApi {
    async fn price_per_gram(&self) -> Result<f64, GoldPriceError> {
        let api_key = self.api_key.as_deref().ok_or(GoldPriceError::MissingKey)?;

        let quote: Value = self
            .client
            .get(&self.url)
            .header("x-access-token", api_key)
            .header("Content-Type", "application/json")
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        parse_gram_price(&quote).ok_or(GoldPriceError::MissingPrice)
    }
}

/// Read `price_gram_24k` from a goldapi.io quote. The field may be a number or a numeric string.
pub fn parse_gram_price(quote: &Value) -> Option<f64> {
    product_core::coerce_number(quote.get("price_gram_24k")?).filter(|price| *price > 0.0)
}

/// A gold price that never changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedGoldPrice(pub f64);

#[async_trait]
impl GoldPriceSource for FixedGoldPrice {
    async fn price_per_gram(&self) -> Result<f64, GoldPriceError> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_the_gram_price() {
        assert_eq!(parse_gram_price(&json!({"price_gram_24k": 104.27})), Some(104.27));
        assert_eq!(parse_gram_price(&json!({"price_gram_24k": "98.5"})), Some(98.5));
        assert_eq!(parse_gram_price(&json!({"price": 3300.0})), None);
        assert_eq!(parse_gram_price(&json!({"price_gram_24k": 0})), None);
    }

    #[tokio::test]
    async fn missing_key_falls_back() {
        let source = GoldApi::new(GOLD_API_URL, None);
        assert!(matches!(
            source.price_per_gram().await,
            Err(GoldPriceError::MissingKey)
        ));
        assert_eq!(current_price(&source, FALLBACK_GOLD_PRICE).await, 75.0);
    }

    #[tokio::test]
    async fn fixed_price() {
        assert_eq!(current_price(&FixedGoldPrice(61.5), FALLBACK_GOLD_PRICE).await, 61.5);
    }
}
