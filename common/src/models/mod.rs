mod coin;
mod query;

pub use coin::Coin;
pub use query::{MarketOrder, MarketQuery, PerPage, VsCurrency};
