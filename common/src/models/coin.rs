use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One market record as returned by the `/coins/markets` endpoint.
///
/// Numeric fields are nullable on the wire (newly listed or delisted coins
/// report `null`), so they are all optional here. The record is a snapshot;
/// nothing mutates it locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coin {
    /// Unique identifier for the coin (e.g., "bitcoin", "ethereum")
    pub id: String,
    /// Ticker symbol (e.g., "btc", "eth")
    pub symbol: String,
    /// Human-readable name (e.g., "Bitcoin", "Ethereum")
    pub name: String,
    /// URL of the coin's logo image
    pub image: String,
    /// Current price in the requested quote currency
    pub current_price: Option<f64>,
    /// Market capitalization in the requested quote currency
    pub market_cap: Option<f64>,
    /// Coins currently in circulation
    pub circulating_supply: Option<f64>,
    /// When the API last refreshed this record
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}
