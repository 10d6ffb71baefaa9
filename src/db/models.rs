//! Database row types for `listing_observations` and `market_price`.
//! Used by sqlx for typed queries.

use crate::config::UNKNOWN_MODEL;
use crate::error::{AppError, Result};
use crate::time::parse_timestamp;
use crate::types::{
    Availability, Listing, ListingSnapshot, ListingType, MarketPriceSummary, SoldTimeEstimate,
    SoldTimeMethod,
};

#[derive(Debug, sqlx::FromRow)]
pub struct ObservationRow {
    pub id: i64,
    pub observed_at: String,
    pub marketplace: String,
    pub item_name: String,
    pub search_city: String,
    pub search_phrase: String,
    pub listing_id: String,
    pub post_url: String,
    pub title: String,
    pub price_text: String,
    pub price_value: Option<f64>,
    pub currency: Option<String>,
    pub location: Option<String>,
    pub seller: Option<String>,
    pub item_condition: Option<String>,
    pub description: Option<String>,
    pub detected_model: Option<String>,
    pub listing_type: Option<String>,
    pub is_target_exact: Option<bool>,
    pub classification_confidence: Option<f64>,
    pub classification_reason: Option<String>,
    pub availability: String,
    pub sold_estimated_at: Option<String>,
    pub sold_time_method: Option<String>,
}

impl TryFrom<ObservationRow> for ListingSnapshot {
    type Error = AppError;

    fn try_from(row: ObservationRow) -> Result<Self> {
        let sold_estimate = match row.sold_estimated_at.as_deref() {
            Some(raw) => Some(SoldTimeEstimate {
                sold_estimated_at: parse_timestamp(raw)?,
                method: SoldTimeMethod::from_label(row.sold_time_method.as_deref()),
            }),
            None => None,
        };

        Ok(ListingSnapshot {
            listing: Listing {
                marketplace: row.marketplace,
                id: row.listing_id,
                title: row.title,
                price: row.price_text,
                post_url: row.post_url,
                location: row.location.unwrap_or_default(),
                seller: row.seller.unwrap_or_default(),
                condition: row.item_condition.unwrap_or_default(),
                description: row.description.unwrap_or_default(),
            },
            item_name: row.item_name,
            search_city: row.search_city,
            search_phrase: row.search_phrase,
            availability: Availability::from(row.availability),
            observed_at: parse_timestamp(&row.observed_at)?,
            price_value: row.price_value,
            currency: row.currency,
            detected_model: row.detected_model.unwrap_or_else(|| UNKNOWN_MODEL.to_string()),
            listing_type: ListingType::from_label(row.listing_type.as_deref().unwrap_or("other")),
            is_target_exact: row.is_target_exact.unwrap_or(false),
            classification_confidence: row.classification_confidence,
            classification_reason: row.classification_reason,
            sold_estimate,
        })
    }
}

/// Columns needed to re-run classification on a stored row.
#[derive(Debug, sqlx::FromRow)]
pub struct LabelRow {
    pub id: i64,
    pub item_name: String,
    pub title: String,
    pub description: Option<String>,
    pub detected_model: Option<String>,
    pub listing_type: Option<String>,
    pub is_target_exact: Option<bool>,
    pub classification_confidence: Option<f64>,
    pub classification_reason: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
pub struct SoldEstimateRow {
    pub sold_estimated_at: String,
    pub sold_time_method: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
pub struct MarketPriceRow {
    pub item_name: String,
    pub marketplace: String,
    pub search_city: String,
    pub window_days: i64,
    pub sample_size: i64,
    pub msrp_estimate: Option<f64>,
    pub currency: Option<String>,
    pub updated_at: String,
}

impl TryFrom<MarketPriceRow> for MarketPriceSummary {
    type Error = AppError;

    fn try_from(row: MarketPriceRow) -> Result<Self> {
        Ok(MarketPriceSummary {
            item_name: row.item_name,
            marketplace: row.marketplace,
            search_city: row.search_city,
            window_days: u32::try_from(row.window_days).unwrap_or_default(),
            sample_size: row.sample_size,
            msrp_estimate: row.msrp_estimate,
            currency: row.currency,
            updated_at: parse_timestamp(&row.updated_at)?,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct ModelCountRow {
    pub detected_model: String,
    pub cnt: i64,
}
