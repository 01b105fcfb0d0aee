use common::{
    models::{Coin, MarketQuery, VsCurrency},
    pagination::PageWindow,
};
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct CoinRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Current Price")]
    price: String,
    #[tabled(rename = "Market Cap")]
    market_cap: String,
    #[tabled(rename = "Circulating Supply")]
    supply: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

fn amount(value: Option<f64>, currency: VsCurrency) -> String {
    match value {
        Some(v) => format!("{} {}", v, currency),
        None => "-".to_string(),
    }
}

fn plain(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

/// Render the fetched page as a table, one row per record, in API order.
pub fn coin_table(coins: &[Coin], currency: VsCurrency) -> String {
    let rows: Vec<CoinRow> = coins
        .iter()
        .map(|coin| CoinRow {
            name: coin.name.clone(),
            symbol: coin.symbol.to_uppercase(),
            price: amount(coin.current_price, currency),
            market_cap: amount(coin.market_cap, currency),
            supply: plain(coin.circulating_supply),
            updated: coin
                .last_updated
                .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}

/// Render the pagination control, current page bracketed:
/// `< 496 497 [498] 499 500 >`
pub fn pagination_bar(window: PageWindow, current_page: u32) -> String {
    let mut parts = Vec::with_capacity(window.pages().count() + 2);
    parts.push("<".to_string());
    for page in window.pages() {
        if page == current_page {
            parts.push(format!("[{}]", page));
        } else {
            parts.push(page.to_string());
        }
    }
    parts.push(">".to_string());
    parts.join(" ")
}

/// One-line summary of the active query state, shown under the table.
pub fn status_line(query: &MarketQuery) -> String {
    format!(
        "page {} | {} per page | {} | {}",
        query.page, query.per_page, query.vs_currency, query.order
    )
}
