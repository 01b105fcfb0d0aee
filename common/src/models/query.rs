use crate::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Quote currency selector
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum VsCurrency {
    #[serde(rename = "usd")]
    Usd,
    #[serde(rename = "eur")]
    Eur,
}

impl std::fmt::Display for VsCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VsCurrency::Usd => write!(f, "usd"),
            VsCurrency::Eur => write!(f, "eur"),
        }
    }
}

impl FromStr for VsCurrency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "usd" => Ok(VsCurrency::Usd),
            "eur" => Ok(VsCurrency::Eur),
            unknown => Err(Error::Parse(format!(
                "Unknown currency: {}. Supported currencies: usd, eur",
                unknown
            ))),
        }
    }
}

/// Sort order selector
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MarketOrder {
    #[serde(rename = "market_cap_desc")]
    MarketCapDesc,
    #[serde(rename = "market_cap_asc")]
    MarketCapAsc,
}

impl std::fmt::Display for MarketOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarketOrder::MarketCapDesc => write!(f, "market_cap_desc"),
            MarketOrder::MarketCapAsc => write!(f, "market_cap_asc"),
        }
    }
}

impl FromStr for MarketOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "market_cap_desc" | "desc" => Ok(MarketOrder::MarketCapDesc),
            "market_cap_asc" | "asc" => Ok(MarketOrder::MarketCapAsc),
            unknown => Err(Error::Parse(format!(
                "Unknown order: {}. Supported orders: market_cap_desc, market_cap_asc",
                unknown
            ))),
        }
    }
}

/// Rows requested per page. The API accepts any value up to 250, but the
/// view exposes the same fixed choices the selector offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerPage {
    Five,
    Ten,
    Twenty,
    Fifty,
    OneHundred,
}

impl PerPage {
    pub fn from_u32(n: u32) -> crate::Result<Self> {
        match n {
            5 => Ok(PerPage::Five),
            10 => Ok(PerPage::Ten),
            20 => Ok(PerPage::Twenty),
            50 => Ok(PerPage::Fifty),
            100 => Ok(PerPage::OneHundred),
            other => Err(Error::Parse(format!(
                "Unsupported page size: {}. Supported sizes: 5, 10, 20, 50, 100",
                other
            ))),
        }
    }

    pub fn as_u32(self) -> u32 {
        match self {
            PerPage::Five => 5,
            PerPage::Ten => 10,
            PerPage::Twenty => 20,
            PerPage::Fifty => 50,
            PerPage::OneHundred => 100,
        }
    }
}

impl std::fmt::Display for PerPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

impl FromStr for PerPage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = s
            .parse::<u32>()
            .map_err(|_| Error::Parse(format!("Invalid page size: {}", s)))?;
        PerPage::from_u32(n)
    }
}

/// The full set of user-selectable query parameters for one markets request.
///
/// Any change to one of these fields is what triggers a re-fetch; the struct
/// itself only knows how to encode itself into the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketQuery {
    pub vs_currency: VsCurrency,
    pub order: MarketOrder,
    pub per_page: PerPage,
    pub page: u32,
}

impl Default for MarketQuery {
    fn default() -> Self {
        Self {
            vs_currency: VsCurrency::Usd,
            order: MarketOrder::MarketCapDesc,
            per_page: PerPage::Ten,
            page: 1,
        }
    }
}

impl MarketQuery {
    /// Encode the state as `(key, value)` pairs for the request, values
    /// embedded verbatim. Sparkline data is never requested.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("vs_currency", self.vs_currency.to_string()),
            ("order", self.order.to_string()),
            ("per_page", self.per_page.to_string()),
            ("page", self.page.to_string()),
            ("sparkline", "false".to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_params_embed_values_verbatim() {
        let query = MarketQuery {
            vs_currency: VsCurrency::Eur,
            order: MarketOrder::MarketCapAsc,
            per_page: PerPage::Fifty,
            page: 42,
        };

        assert_eq!(
            query.to_query_params(),
            vec![
                ("vs_currency", "eur".to_string()),
                ("order", "market_cap_asc".to_string()),
                ("per_page", "50".to_string()),
                ("page", "42".to_string()),
                ("sparkline", "false".to_string()),
            ]
        );
    }

    #[test]
    fn default_query_matches_initial_ui_state() {
        let query = MarketQuery::default();
        assert_eq!(query.vs_currency, VsCurrency::Usd);
        assert_eq!(query.order, MarketOrder::MarketCapDesc);
        assert_eq!(query.per_page, PerPage::Ten);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn per_page_accepts_only_selector_values() {
        for n in [5, 10, 20, 50, 100] {
            assert_eq!(PerPage::from_u32(n).unwrap().as_u32(), n);
        }
        for n in [0, 1, 7, 25, 250] {
            assert!(PerPage::from_u32(n).is_err());
        }
    }

    #[test]
    fn selectors_parse_from_strings() {
        assert_eq!("usd".parse::<VsCurrency>().unwrap(), VsCurrency::Usd);
        assert_eq!("eur".parse::<VsCurrency>().unwrap(), VsCurrency::Eur);
        assert!("gbp".parse::<VsCurrency>().is_err());

        assert_eq!(
            "market_cap_desc".parse::<MarketOrder>().unwrap(),
            MarketOrder::MarketCapDesc
        );
        assert_eq!("asc".parse::<MarketOrder>().unwrap(), MarketOrder::MarketCapAsc);
        assert!("volume_desc".parse::<MarketOrder>().is_err());

        assert_eq!("20".parse::<PerPage>().unwrap(), PerPage::Twenty);
        assert!("fifteen".parse::<PerPage>().is_err());
    }
}
