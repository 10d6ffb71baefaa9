pub mod market_price;

pub use market_price::MarketPriceAggregator;
