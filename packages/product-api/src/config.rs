use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::gold::{GoldApi, FALLBACK_GOLD_PRICE, GOLD_API_URL};
use crate::{AppState, CatalogSource};

/// Serve the priced product catalog over HTTP.
#[derive(Clone, Debug, Parser)]
#[clap(name = "product-api", version)]
pub struct ServerConfig {
    /// Address to listen on.
    #[clap(long, env = "PRODUCT_API_ADDR", default_value = "0.0.0.0:8080")]
    pub addr: SocketAddr,

    /// Catalog JSON file. Uses the built-in catalog when omitted.
    #[clap(long, env = "PRODUCT_API_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// goldapi.io access token. Without it every request uses the fallback price.
    #[clap(long, env = "GOLD_API_KEY", hide_env_values = true)]
    pub gold_api_key: Option<String>,

    /// Gold price endpoint.
    #[clap(long, env = "GOLD_API_URL", default_value = GOLD_API_URL)]
    pub gold_api_url: String,

    /// USD per gram used when the gold price cannot be fetched.
    #[clap(long, default_value_t = FALLBACK_GOLD_PRICE)]
    pub fallback_gold_price: f64,
}

impl ServerConfig {
    pub fn state(&self) -> AppState {
        let catalog = match &self.catalog {
            Some(path) => CatalogSource::File(path.clone()),
            None => CatalogSource::default(),
        };

        let mut state = AppState::new(
            catalog,
            GoldApi::new(self.gold_api_url.clone(), self.gold_api_key.clone()),
        );
        state.fallback_gold_price = self.fallback_gold_price;
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServerConfig::try_parse_from(["product-api"]).unwrap();
        assert_eq!(config.addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.gold_api_url, GOLD_API_URL);
        assert_eq!(config.fallback_gold_price, 75.0);
        assert_eq!(config.state().catalog, CatalogSource::default());
    }

    #[test]
    fn catalog_file() {
        let config = ServerConfig::try_parse_from([
            "product-api",
            "--catalog",
            "/srv/products.json",
            "--fallback-gold-price",
            "80",
        ])
        .unwrap();

        let state = config.state();
        assert_eq!(state.catalog, CatalogSource::File("/srv/products.json".into()));
        assert_eq!(state.fallback_gold_price, 80.0);
    }
}
