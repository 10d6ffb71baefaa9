use chrono::{DateTime, Utc};
use sqlx::SqliteConnection;
use tracing::debug;

use crate::db::models::SoldEstimateRow;
use crate::error::Result;
use crate::time::parse_timestamp;
use crate::types::{SoldTimeEstimate, SoldTimeMethod};

/// Sold time for a listing being recorded as "out" at `observed_at`.
///
/// The first stored estimate wins, so repeated "out" observations keep the
/// same answer. Otherwise: halfway between the last active observation and
/// now, or now itself when the listing was never seen active.
pub async fn estimate_sold_time(
    conn: &mut SqliteConnection,
    marketplace: &str,
    listing_id: &str,
    observed_at: DateTime<Utc>,
) -> Result<SoldTimeEstimate> {
    let existing = sqlx::query_as::<_, SoldEstimateRow>(
        r#"
        SELECT sold_estimated_at, sold_time_method
        FROM listing_observations
        WHERE marketplace = ? AND listing_id = ?
          AND availability = 'out'
          AND sold_estimated_at IS NOT NULL
        ORDER BY observed_at ASC
        LIMIT 1
        "#,
    )
    .bind(marketplace)
    .bind(listing_id)
    .fetch_optional(&mut *conn)
    .await?;

    if let Some(row) = existing {
        return Ok(SoldTimeEstimate {
            sold_estimated_at: parse_timestamp(&row.sold_estimated_at)?,
            method: SoldTimeMethod::from_label(row.sold_time_method.as_deref()),
        });
    }

    let last_active: Option<String> = sqlx::query_scalar(
        r#"
        SELECT observed_at
        FROM listing_observations
        WHERE marketplace = ? AND listing_id = ?
          AND availability != 'out'
        ORDER BY observed_at DESC
        LIMIT 1
        "#,
    )
    .bind(marketplace)
    .bind(listing_id)
    .fetch_optional(&mut *conn)
    .await?;

    let estimate = match last_active {
        Some(raw) => SoldTimeEstimate {
            sold_estimated_at: midpoint(parse_timestamp(&raw)?, observed_at),
            method: SoldTimeMethod::MidpointLastActiveAndFirstSold,
        },
        None => SoldTimeEstimate {
            sold_estimated_at: observed_at,
            method: SoldTimeMethod::FirstSeenOutOfStock,
        },
    };
    debug!(
        marketplace,
        listing_id,
        sold_estimated_at = %estimate.sold_estimated_at,
        method = %estimate.method,
        "Sold time estimated"
    );
    Ok(estimate)
}

pub fn midpoint(last_active: DateTime<Utc>, first_out: DateTime<Utc>) -> DateTime<Utc> {
    last_active + (first_out - last_active) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn midpoint_is_halfway() {
        let a = Utc.with_ymd_and_hms(2026, 2, 25, 10, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2026, 2, 25, 12, 0, 0).unwrap();
        assert_eq!(midpoint(a, b), Utc.with_ymd_and_hms(2026, 2, 25, 11, 0, 0).unwrap());
    }

    #[test]
    fn odd_gap_keeps_half_second() {
        let a = Utc.with_ymd_and_hms(2026, 2, 25, 10, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2026, 2, 25, 10, 0, 1).unwrap();
        assert_eq!((midpoint(a, b) - a).num_milliseconds(), 500);
    }
}
