use crate::MarketConnector;
use async_trait::async_trait;
use common::{
    models::{Coin, MarketQuery},
    Error, Result,
};
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, error};

const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Header CoinGecko expects the demo-tier API key on.
const API_KEY_HEADER: &str = "x-cg-demo-api-key";

pub struct CoinGeckoConnector {
    client: reqwest::Client,
    base_url: String,
}

impl CoinGeckoConnector {
    /// Connector against the public API, no key. Works for light use;
    /// CoinGecko rate-limits keyless clients more aggressively.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: COINGECKO_API_URL.to_string(),
        }
    }

    /// Connector with an explicit base URL and optional demo API key.
    pub fn with_config(base_url: impl Into<String>, api_key: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_static("application/json"));

        if let Some(key) = api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|_| Error::Config("Invalid API key value".to_string()))?;
            headers.insert(API_KEY_HEADER, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(Error::Http)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

impl Default for CoinGeckoConnector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketConnector for CoinGeckoConnector {
    async fn fetch_markets(&self, query: &MarketQuery) -> Result<Vec<Coin>> {
        let url = format!("{}/coins/markets", self.base_url);

        debug!(
            "Fetching markets from CoinGecko: {} ({} {}, page {}, {} per page)",
            url, query.vs_currency, query.order, query.page, query.per_page
        );

        let response = self
            .client
            .get(&url)
            .query(&query.to_query_params())
            .send()
            .await
            .map_err(Error::Http)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("CoinGecko API error: {} - {}", status, error_text);
            return Err(Error::Api(format!(
                "CoinGecko API error: {} - {}",
                status, error_text
            )));
        }

        let coins: Vec<Coin> = response.json().await.map_err(|e| {
            Error::Parse(format!("Failed to parse markets response: {}", e))
        })?;

        debug!("Fetched {} market records", coins.len());

        Ok(coins)
    }
}

#[cfg(test)]
mod tests {
    use common::models::Coin;

    // Trimmed capture of a real /coins/markets response; the API returns
    // more fields than we model and nulls out numerics for thin listings.
    const MARKETS_JSON: &str = r#"[
        {
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "image": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
            "current_price": 64212.0,
            "market_cap": 1265432109876.0,
            "market_cap_rank": 1,
            "circulating_supply": 19712345.0,
            "total_supply": 21000000.0,
            "last_updated": "2024-06-01T12:30:00.000Z"
        },
        {
            "id": "newcoin",
            "symbol": "new",
            "name": "New Coin",
            "image": "https://assets.coingecko.com/coins/images/2/large/newcoin.png",
            "current_price": null,
            "market_cap": null,
            "circulating_supply": null,
            "last_updated": null
        }
    ]"#;

    #[test]
    fn decodes_markets_response_preserving_order() {
        let coins: Vec<Coin> = serde_json::from_str(MARKETS_JSON).unwrap();

        assert_eq!(coins.len(), 2);
        assert_eq!(coins[0].id, "bitcoin");
        assert_eq!(coins[0].name, "Bitcoin");
        assert_eq!(coins[0].current_price, Some(64212.0));
        assert_eq!(coins[0].circulating_supply, Some(19712345.0));
        assert!(coins[0].last_updated.is_some());

        assert_eq!(coins[1].id, "newcoin");
        assert_eq!(coins[1].current_price, None);
        assert_eq!(coins[1].market_cap, None);
        assert_eq!(coins[1].last_updated, None);
    }

    #[test]
    fn connector_accepts_optional_api_key() {
        use super::CoinGeckoConnector;

        assert!(CoinGeckoConnector::with_config("http://localhost:9000", None).is_ok());
        assert!(CoinGeckoConnector::with_config("http://localhost:9000", Some("demo-key")).is_ok());
        assert!(CoinGeckoConnector::with_config("http://localhost:9000", Some("bad\nkey")).is_err());
    }
}
