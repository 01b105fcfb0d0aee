mod commands;
mod config;
mod render;
mod view;

use clap::Parser;
use commands::Command;
use common::models::{MarketOrder, MarketQuery, PerPage, VsCurrency};
use config::AppConfig;
use connectors::coingecko::CoinGeckoConnector;
use std::io::Write as _;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use view::{MarketView, TOTAL_PAGE_COUNT};

/// Paginated coin market viewer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Quote currency (usd or eur)
    #[arg(long, default_value = "usd")]
    currency: VsCurrency,

    /// Sort order (market_cap_desc or market_cap_asc)
    #[arg(long, default_value = "market_cap_desc")]
    order: MarketOrder,

    /// Rows per page (5, 10, 20, 50 or 100)
    #[arg(long = "per-page", default_value = "10")]
    per_page: PerPage,

    /// Page to open on
    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Fetch a single page, print it and exit
    #[arg(long, default_value_t = false)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    info!("Starting coinview");

    let config = AppConfig::from_env();
    let connector = CoinGeckoConnector::with_config(&config.api_url, config.api_key.as_deref())
        .map_err(|e| format!("Failed to create market connector: {}", e))?;

    let query = MarketQuery {
        vs_currency: cli.currency,
        order: cli.order,
        per_page: cli.per_page,
        page: cli.page.clamp(1, TOTAL_PAGE_COUNT),
    };

    let mut market_view = MarketView::new(Arc::new(connector), query);

    fetch_and_render(&mut market_view).await;

    if cli.once {
        return Ok(());
    }

    println!("Type 'help' for the command list.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };

        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", commands::HELP_TEXT),
            Command::Refresh => fetch_and_render(&mut market_view).await,
            Command::NextPage => {
                if market_view.next_page() {
                    fetch_and_render(&mut market_view).await;
                } else {
                    println!("Already on the last page");
                }
            }
            Command::PreviousPage => {
                if market_view.previous_page() {
                    fetch_and_render(&mut market_view).await;
                } else {
                    println!("Already on the first page");
                }
            }
            Command::GotoPage(page) => match market_view.goto_page(page) {
                Ok(true) => fetch_and_render(&mut market_view).await,
                Ok(false) => {}
                Err(e) => println!("{}", e),
            },
            Command::SetCurrency(currency) => {
                if market_view.set_currency(currency) {
                    fetch_and_render(&mut market_view).await;
                }
            }
            Command::SetOrder(order) => {
                if market_view.set_order(order) {
                    fetch_and_render(&mut market_view).await;
                }
            }
            Command::SetPerPage(per_page) => {
                if market_view.set_per_page(per_page) {
                    fetch_and_render(&mut market_view).await;
                }
            }
        }
    }

    Ok(())
}

/// One fetch per interaction: show the loading indicator, await the result,
/// then render. A failed fetch is reported and the previous table stays up.
async fn fetch_and_render(market_view: &mut MarketView) {
    println!("Loading...");

    match market_view.refresh().await {
        Ok(()) => {
            println!(
                "{}",
                render::coin_table(market_view.coins(), market_view.query().vs_currency)
            );
            println!(
                "{}",
                render::pagination_bar(market_view.page_window(), market_view.query().page)
            );
            println!("{}", render::status_line(market_view.query()));
        }
        Err(e) => {
            error!("Fetch failed: {}", e);
            println!("Fetch failed: {}", e);
        }
    }
}
