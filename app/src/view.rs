use common::{
    models::{Coin, MarketOrder, MarketQuery, PerPage, VsCurrency},
    pagination::PageWindow,
    Error, Result,
};
use connectors::MarketConnector;
use std::sync::Arc;
use tracing::debug;

/// Fixed upper bound on the page selector. The listing endpoint does not
/// report a total, so the control assumes this many pages exist.
pub const TOTAL_PAGE_COUNT: u32 = 10_000;

/// The market view: user-selectable query parameters plus the last
/// successfully fetched page of records.
///
/// Selector mutations report whether they changed anything; the caller
/// issues exactly one [`MarketView::refresh`] per reported change. A failed
/// refresh keeps the previous records on screen.
pub struct MarketView {
    connector: Arc<dyn MarketConnector>,
    query: MarketQuery,
    coins: Vec<Coin>,
    loading: bool,
}

impl MarketView {
    pub fn new(connector: Arc<dyn MarketConnector>, query: MarketQuery) -> Self {
        Self {
            connector,
            query,
            coins: Vec::new(),
            loading: false,
        }
    }

    pub fn query(&self) -> &MarketQuery {
        &self.query
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The range of page numbers the pagination control should expose.
    pub fn page_window(&self) -> PageWindow {
        PageWindow::compute(self.query.page, TOTAL_PAGE_COUNT)
    }

    /// Fetch the page for the current query state and replace the displayed
    /// records. On failure the previous records are kept and the error is
    /// returned to the caller to surface.
    pub async fn refresh(&mut self) -> Result<()> {
        debug!(
            "Refreshing market view: page {} of {}",
            self.query.page, TOTAL_PAGE_COUNT
        );

        self.loading = true;
        let result = self.connector.fetch_markets(&self.query).await;
        self.loading = false;

        self.coins = result?;
        Ok(())
    }

    pub fn set_currency(&mut self, currency: VsCurrency) -> bool {
        if self.query.vs_currency == currency {
            return false;
        }
        self.query.vs_currency = currency;
        true
    }

    pub fn set_order(&mut self, order: MarketOrder) -> bool {
        if self.query.order == order {
            return false;
        }
        self.query.order = order;
        true
    }

    /// Changing the page size keeps the current page, as the original
    /// selector does.
    pub fn set_per_page(&mut self, per_page: PerPage) -> bool {
        if self.query.per_page == per_page {
            return false;
        }
        self.query.per_page = per_page;
        true
    }

    /// Jump to an explicit page. Out-of-range input is an error and leaves
    /// the state untouched; jumping to the current page changes nothing.
    pub fn goto_page(&mut self, page: u32) -> Result<bool> {
        if page < 1 || page > TOTAL_PAGE_COUNT {
            return Err(Error::Parse(format!(
                "Page out of range: {}. Valid pages: 1-{}",
                page, TOTAL_PAGE_COUNT
            )));
        }
        if self.query.page == page {
            return Ok(false);
        }
        self.query.page = page;
        Ok(true)
    }

    /// Step forward one page; a no-op on the last page.
    pub fn next_page(&mut self) -> bool {
        if self.query.page == TOTAL_PAGE_COUNT {
            return false;
        }
        self.query.page += 1;
        true
    }

    /// Step back one page; a no-op on the first page.
    pub fn previous_page(&mut self) -> bool {
        if self.query.page == 1 {
            return false;
        }
        self.query.page -= 1;
        true
    }
}
