use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Base URL of the market-data API
    pub api_url: String,
    /// Optional demo-tier API key
    pub api_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.coingecko.com/api/v3".to_string(),
            api_key: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let api_url = std::env::var("COINGECKO_API_URL")
            .unwrap_or_else(|_| "https://api.coingecko.com/api/v3".to_string());
        let api_key = std::env::var("COINGECKO_API_KEY").ok();

        Self { api_url, api_key }
    }
}
