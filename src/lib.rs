//! Camera listing classification and sold-price history.
//!
//! Listings seen by a marketplace scraper are classified against a curated
//! model registry, appended to a SQLite observation log with an estimated
//! sold time, and rolled up into per-model market prices.

pub mod config;
pub mod db;
pub mod detector;
pub mod error;
pub mod registry;
pub mod scorer;
pub mod time;
pub mod types;

pub use db::ObservationStore;
pub use error::{AppError, Result};
pub use scorer::MarketPriceAggregator;
