use std::str::FromStr;

use crate::error::{AppError, Result};

/// Default look-back window for market price aggregation (days).
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

/// Marker the scraper writes when a listing shows no price at all.
pub const UNSPECIFIED_PRICE: &str = "**unspecified**";

/// Detected model label for listings with no reliable model signal.
pub const UNKNOWN_MODEL: &str = "unknown";

/// Number of rows shown in the reclassify report's model breakdown.
pub const DEFAULT_TOP_MODELS_LIMIT: usize = 20;

/// Confidence tiers attached to classification verdicts.
pub mod confidence {
    /// Target model alone, as a camera body.
    pub const EXACT: f64 = 0.98;
    /// Target model referenced, but the listing is a lens/accessory/other.
    pub const TARGET_NOT_BODY: f64 = 0.92;
    /// Some model matched, target not confirmed.
    pub const MODEL_SIGNAL: f64 = 0.95;
    /// Nothing recognisable in the text.
    pub const NO_SIGNAL: f64 = 0.35;
}

/// One (item, marketplace, city) key the price refresher recomputes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTarget {
    pub item_name: String,
    pub marketplace: String,
    pub search_city: String,
}

impl PriceTarget {
    /// Parses `item_name:marketplace:search_city`.
    pub fn parse(raw: &str) -> Result<Self> {
        let parts: Vec<&str> = raw.split(':').map(str::trim).collect();
        match parts.as_slice() {
            [item, marketplace, city]
                if !item.is_empty() && !marketplace.is_empty() && !city.is_empty() =>
            {
                Ok(Self {
                    item_name: item.to_string(),
                    marketplace: marketplace.to_string(),
                    search_city: city.to_string(),
                })
            }
            _ => Err(AppError::Config(format!(
                "PRICE_TARGETS entry '{raw}' must look like item_name:marketplace:search_city"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    pub log_level: String,
    /// Aggregation window in days (PRICE_WINDOW_DAYS)
    pub price_window_days: u32,
    /// Keys refreshed by `refresh_prices` (PRICE_TARGETS, comma-separated).
    /// Example: "sony_a7c2:facebook:vancouver,ricoh_gr3:facebook:toronto"
    pub price_targets: Vec<PriceTarget>,
    /// Rows in the reclassify report's model breakdown (TOP_MODELS_LIMIT)
    pub top_models_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let price_window_days = positive_setting(
            "PRICE_WINDOW_DAYS",
            std::env::var("PRICE_WINDOW_DAYS").ok().as_deref(),
            DEFAULT_WINDOW_DAYS,
        )?;
        let top_models_limit = positive_setting(
            "TOP_MODELS_LIMIT",
            std::env::var("TOP_MODELS_LIMIT").ok().as_deref(),
            DEFAULT_TOP_MODELS_LIMIT,
        )?;

        let price_targets = std::env::var("PRICE_TARGETS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PriceTarget::parse)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            db_path: std::env::var("DB_PATH").unwrap_or_else(|_| "market_data.db".to_string()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            price_window_days,
            price_targets,
            top_models_limit,
        })
    }
}

/// Unset means `default`; anything else must parse to a value above zero.
fn positive_setting<T>(name: &str, raw: Option<&str>, default: T) -> Result<T>
where
    T: FromStr + PartialOrd + Default,
{
    let Some(raw) = raw else {
        return Ok(default);
    };
    raw.trim()
        .parse::<T>()
        .ok()
        .filter(|value| *value > T::default())
        .ok_or_else(|| AppError::Config(format!("{name} must be a positive integer, got {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_price_target_triple() {
        let target = PriceTarget::parse(" sony_a7c2 : facebook : vancouver ").unwrap();
        assert_eq!(target.item_name, "sony_a7c2");
        assert_eq!(target.marketplace, "facebook");
        assert_eq!(target.search_city, "vancouver");
    }

    #[test]
    fn rejects_incomplete_price_target() {
        assert!(PriceTarget::parse("sony_a7c2:facebook").is_err());
        assert!(PriceTarget::parse("sony_a7c2::vancouver").is_err());
    }

    #[test]
    fn positive_setting_falls_back_when_unset() {
        assert_eq!(positive_setting("TOP_MODELS_LIMIT", None, 20usize).unwrap(), 20);
        assert_eq!(positive_setting("TOP_MODELS_LIMIT", Some(" 5 "), 20usize).unwrap(), 5);
    }

    #[test]
    fn positive_setting_rejects_zero_and_garbage() {
        for raw in ["0", "-3", "ten", ""] {
            assert!(
                matches!(
                    positive_setting("TOP_MODELS_LIMIT", Some(raw), 20usize),
                    Err(AppError::Config(_))
                ),
                "accepted {raw:?}"
            );
        }
        assert!(positive_setting("PRICE_WINDOW_DAYS", Some("0"), 30u32).is_err());
    }
}
