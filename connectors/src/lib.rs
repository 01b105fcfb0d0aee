pub mod coingecko;

use async_trait::async_trait;
use common::{
    models::{Coin, MarketQuery},
    Result,
};

/// Trait defining the interface for market-data API clients
#[async_trait]
pub trait MarketConnector: Send + Sync {
    /// Fetch one page of market records for the given query parameters
    async fn fetch_markets(&self, query: &MarketQuery) -> Result<Vec<Coin>>;
}
