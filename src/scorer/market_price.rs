use chrono::{DateTime, Duration, Utc};
use tracing::{error, info};

use crate::config::PriceTarget;
use crate::db::models::MarketPriceRow;
use crate::db::ObservationStore;
use crate::error::Result;
use crate::time::{format_timestamp, utc_now};
use crate::types::MarketPriceSummary;

/// Deduplicated sold sample for one model: the latest qualifying "out" row
/// per listing, restricted to listings whose newest row of any kind is "out".
const SOLD_SAMPLE_QUERY: &str = r#"
    WITH latest_listing_state AS (
        SELECT
            listing_id,
            availability,
            ROW_NUMBER() OVER (PARTITION BY listing_id ORDER BY observed_at DESC, id DESC) AS rn
        FROM listing_observations
        WHERE marketplace = ? AND search_city = ?
    ),
    latest_sold_row_per_listing AS (
        SELECT
            o.listing_id,
            o.price_value,
            o.currency,
            ROW_NUMBER() OVER (PARTITION BY o.listing_id ORDER BY o.observed_at DESC, o.id DESC) AS rn
        FROM listing_observations o
        JOIN latest_listing_state s
            ON s.listing_id = o.listing_id
           AND s.rn = 1
           AND s.availability = 'out'
        WHERE o.marketplace = ?
          AND o.search_city = ?
          AND o.availability = 'out'
          AND COALESCE(o.sold_estimated_at, o.observed_at) >= ?
          AND o.price_value IS NOT NULL
          AND COALESCE(o.listing_type, 'other') = 'camera_body'
          AND o.detected_model = ?
    ),
    sample AS (
        SELECT price_value, currency FROM latest_sold_row_per_listing WHERE rn = 1
    )
    SELECT
        (SELECT COUNT(*) FROM sample) AS sample_size,
        (SELECT AVG(price_value) FROM sample) AS msrp_estimate,
        (
            SELECT currency FROM sample
            WHERE currency IS NOT NULL
            GROUP BY currency
            ORDER BY COUNT(*) DESC, currency ASC
            LIMIT 1
        ) AS currency
"#;

/// Start of the window ending at `now`, floored at the Unix epoch so that
/// oversized windows simply cover every stored row.
fn window_cutoff(now: DateTime<Utc>, window_days: u32) -> DateTime<Utc> {
    let floor = DateTime::<Utc>::default();
    Duration::try_days(i64::from(window_days))
        .and_then(|span| now.checked_sub_signed(span))
        .map_or(floor, |cutoff| cutoff.max(floor))
}

/// Recomputes `market_price` rows from sold observations.
pub struct MarketPriceAggregator {
    store: ObservationStore,
}

impl MarketPriceAggregator {
    pub fn new(store: ObservationStore) -> Self {
        Self { store }
    }

    /// Refreshes every configured target, logging failures per target.
    /// Returns the summaries that were written.
    pub async fn refresh_all(
        &self,
        targets: &[PriceTarget],
        window_days: u32,
    ) -> Vec<MarketPriceSummary> {
        let mut written = Vec::with_capacity(targets.len());
        for target in targets {
            match self
                .refresh_market_price(
                    &target.item_name,
                    &target.marketplace,
                    &target.search_city,
                    window_days,
                )
                .await
            {
                Ok(summary) => written.push(summary),
                Err(e) => error!(
                    item_name = %target.item_name,
                    marketplace = %target.marketplace,
                    search_city = %target.search_city,
                    "Price refresh error: {e}"
                ),
            }
        }
        written
    }

    pub async fn refresh_market_price(
        &self,
        item_name: &str,
        marketplace: &str,
        search_city: &str,
        window_days: u32,
    ) -> Result<MarketPriceSummary> {
        self.refresh_market_price_at(item_name, marketplace, search_city, window_days, utc_now())
            .await
    }

    /// Mean sold price of `item_name` camera bodies over the `window_days`
    /// before `now`, upserted into `market_price`.
    pub async fn refresh_market_price_at(
        &self,
        item_name: &str,
        marketplace: &str,
        search_city: &str,
        window_days: u32,
        now: DateTime<Utc>,
    ) -> Result<MarketPriceSummary> {
        self.store.ensure_ready().await?;

        let cutoff = format_timestamp(window_cutoff(now, window_days));
        let mut tx = self.store.begin_write().await?;

        let (sample_size, msrp_estimate, currency) =
            sqlx::query_as::<_, (i64, Option<f64>, Option<String>)>(SOLD_SAMPLE_QUERY)
                .bind(marketplace)
                .bind(search_city)
                .bind(marketplace)
                .bind(search_city)
                .bind(&cutoff)
                .bind(item_name)
                .fetch_one(&mut *tx)
                .await?;

        sqlx::query(
            r#"
            INSERT INTO market_price (
                item_name, marketplace, search_city, window_days,
                sample_size, msrp_estimate, currency, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(item_name, marketplace, search_city, window_days) DO UPDATE SET
                sample_size = excluded.sample_size,
                msrp_estimate = excluded.msrp_estimate,
                currency = excluded.currency,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(item_name)
        .bind(marketplace)
        .bind(search_city)
        .bind(i64::from(window_days))
        .bind(sample_size)
        .bind(msrp_estimate)
        .bind(&currency)
        .bind(format_timestamp(now))
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(
            item_name,
            marketplace,
            search_city,
            window_days,
            sample_size,
            msrp_estimate = msrp_estimate.unwrap_or(0.0),
            currency = currency.as_deref().unwrap_or("n/a"),
            "Market price refreshed"
        );

        Ok(MarketPriceSummary {
            item_name: item_name.to_string(),
            marketplace: marketplace.to_string(),
            search_city: search_city.to_string(),
            window_days,
            sample_size,
            msrp_estimate,
            currency,
            updated_at: now,
        })
    }

    /// Last stored summary for a key, if it was ever refreshed.
    pub async fn get_market_price(
        &self,
        item_name: &str,
        marketplace: &str,
        search_city: &str,
        window_days: u32,
    ) -> Result<Option<MarketPriceSummary>> {
        self.store.ensure_ready().await?;

        let row = sqlx::query_as::<_, MarketPriceRow>(
            r#"
            SELECT item_name, marketplace, search_city, window_days,
                   sample_size, msrp_estimate, currency, updated_at
            FROM market_price
            WHERE item_name = ? AND marketplace = ? AND search_city = ? AND window_days = ?
            "#,
        )
        .bind(item_name)
        .bind(marketplace)
        .bind(search_city)
        .bind(i64::from(window_days))
        .fetch_optional(self.store.pool())
        .await?;

        row.map(MarketPriceSummary::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn cutoff_is_window_before_now() {
        let now = Utc.with_ymd_and_hms(2026, 3, 31, 12, 0, 0).unwrap();
        assert_eq!(
            window_cutoff(now, 30),
            Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn oversized_window_floors_at_epoch() {
        let now = Utc.with_ymd_and_hms(2026, 3, 31, 12, 0, 0).unwrap();
        assert_eq!(window_cutoff(now, u32::MAX), DateTime::<Utc>::default());
        assert_eq!(window_cutoff(now, 100_000), DateTime::<Utc>::default());
        assert_eq!(
            format_timestamp(window_cutoff(now, u32::MAX)),
            "1970-01-01T00:00:00+00:00"
        );
    }
}
