use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::{debug, info};

use crate::db::models::{ModelCountRow, ObservationRow};
use crate::db::price::parse_price;
use crate::db::schema::{ensure_schema, relabel_rows, RelabelScope};
use crate::db::sold_time::estimate_sold_time;
use crate::detector::{canonical_item_name, classify_listing};
use crate::error::Result;
use crate::time::{format_timestamp, utc_now};
use crate::types::{Availability, Listing, ListingSnapshot, ObservationContext};

const BUSY_TIMEOUT: Duration = Duration::from_secs(10);

/// Append-only store of listing observations in one SQLite file.
///
/// Cheap to clone; clones share the pool and the schema flag. The schema is
/// created or migrated on the first operation, and every operation runs in
/// its own transaction. Writers take the database lock up front, so several
/// stores (or processes) can share one file.
#[derive(Clone)]
pub struct ObservationStore {
    pool: SqlitePool,
    db_path: PathBuf,
    schema_ready: Arc<AtomicBool>,
}

impl ObservationStore {
    /// Opens (creating if needed) the database file and its parent directory.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db_path = path.as_ref().to_path_buf();
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT);
        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await?;

        info!("Observation store opened at {}", db_path.display());
        Ok(Self {
            pool,
            db_path,
            schema_ready: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Opens a write transaction holding the reserved lock from the start.
    /// A deferred transaction that reads first and then writes can fail with
    /// SQLITE_BUSY instead of waiting when another connection wrote meanwhile.
    pub(crate) async fn begin_write(&self) -> Result<Transaction<'static, Sqlite>> {
        Ok(self.pool.begin_with("BEGIN IMMEDIATE").await?)
    }

    /// Runs schema creation and migrations once per store.
    pub async fn ensure_ready(&self) -> Result<()> {
        if self.schema_ready.load(Ordering::Acquire) {
            return Ok(());
        }
        let mut tx = self.begin_write().await?;
        ensure_schema(&mut tx).await?;
        tx.commit().await?;
        self.schema_ready.store(true, Ordering::Release);
        Ok(())
    }

    /// Records one sighting of `listing`, timestamped now (whole seconds).
    pub async fn record_observation(&self, listing: &Listing, ctx: &ObservationContext) -> Result<()> {
        self.record_observation_at(listing, ctx, utc_now()).await
    }

    /// Records one sighting at an explicit time. A second sighting with the
    /// same (time, marketplace, listing id, availability) is ignored.
    pub async fn record_observation_at(
        &self,
        listing: &Listing,
        ctx: &ObservationContext,
        observed_at: DateTime<Utc>,
    ) -> Result<()> {
        self.ensure_ready().await?;

        let (price_value, currency) = parse_price(&listing.price);
        let classification = classify_listing(listing, &ctx.item_name);
        let item_name = canonical_item_name(&ctx.item_name, &classification.detected_model);
        let post_url = listing.post_url.split('?').next().unwrap_or_default();
        let listing_type = classification.listing_type.to_string();

        let mut tx = self.begin_write().await?;

        let sold = if ctx.availability.is_out() {
            Some(estimate_sold_time(&mut tx, &listing.marketplace, &listing.id, observed_at).await?)
        } else {
            None
        };
        let sold_estimated_at = sold.map(|s| format_timestamp(s.sold_estimated_at));
        let sold_time_method = sold.map(|s| s.method.to_string());

        let result = sqlx::query(
            r#"
            INSERT OR IGNORE INTO listing_observations (
                observed_at, marketplace, item_name, search_city, search_phrase,
                listing_id, post_url, title, price_text, price_value, currency,
                location, seller, item_condition, description,
                detected_model, listing_type, is_target_exact,
                classification_confidence, classification_reason,
                availability, sold_estimated_at, sold_time_method
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(format_timestamp(observed_at))
        .bind(&listing.marketplace)
        .bind(&item_name)
        .bind(&ctx.search_city)
        .bind(&ctx.search_phrase)
        .bind(&listing.id)
        .bind(post_url)
        .bind(&listing.title)
        .bind(&listing.price)
        .bind(price_value)
        .bind(&currency)
        .bind(&listing.location)
        .bind(&listing.seller)
        .bind(&listing.condition)
        .bind(&listing.description)
        .bind(&classification.detected_model)
        .bind(&listing_type)
        .bind(classification.is_target_exact)
        .bind(classification.confidence)
        .bind(&classification.reason)
        .bind(ctx.availability.as_str())
        .bind(&sold_estimated_at)
        .bind(&sold_time_method)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        debug!(
            marketplace = %listing.marketplace,
            listing_id = %listing.id,
            availability = %ctx.availability,
            detected_model = %classification.detected_model,
            listing_type = %listing_type,
            inserted = result.rows_affected() > 0,
            "Observation recorded"
        );
        Ok(())
    }

    /// Whether any row exists for the listing, optionally restricted to one
    /// availability bucket.
    pub async fn has_observation(
        &self,
        marketplace: &str,
        listing_id: &str,
        availability: Option<&Availability>,
    ) -> Result<bool> {
        self.ensure_ready().await?;
        let mut tx = self.pool.begin().await?;

        let found: Option<i64> = match availability {
            Some(availability) => {
                sqlx::query_scalar(
                    r#"
                    SELECT 1 FROM listing_observations
                    WHERE marketplace = ? AND listing_id = ? AND availability = ?
                    LIMIT 1
                    "#,
                )
                .bind(marketplace)
                .bind(listing_id)
                .bind(availability.as_str())
                .fetch_optional(&mut *tx)
                .await?
            }
            None => {
                sqlx::query_scalar(
                    r#"
                    SELECT 1 FROM listing_observations
                    WHERE marketplace = ? AND listing_id = ?
                    LIMIT 1
                    "#,
                )
                .bind(marketplace)
                .bind(listing_id)
                .fetch_optional(&mut *tx)
                .await?
            }
        };

        tx.commit().await?;
        Ok(found.is_some())
    }

    /// Whether the listing was ever seen in a bucket other than "out".
    pub async fn has_non_out_observation(&self, marketplace: &str, listing_id: &str) -> Result<bool> {
        self.ensure_ready().await?;
        let mut tx = self.pool.begin().await?;

        let found: Option<i64> = sqlx::query_scalar(
            r#"
            SELECT 1 FROM listing_observations
            WHERE marketplace = ? AND listing_id = ? AND availability != 'out'
            LIMIT 1
            "#,
        )
        .bind(marketplace)
        .bind(listing_id)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(found.is_some())
    }

    /// Most recent stored observation of a listing.
    pub async fn get_latest_snapshot(
        &self,
        marketplace: &str,
        listing_id: &str,
    ) -> Result<Option<ListingSnapshot>> {
        self.ensure_ready().await?;
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ObservationRow>(
            r#"
            SELECT id, observed_at, marketplace, item_name, search_city, search_phrase,
                   listing_id, post_url, title, price_text, price_value, currency,
                   location, seller, item_condition, description,
                   detected_model, listing_type, is_target_exact,
                   classification_confidence, classification_reason,
                   availability, sold_estimated_at, sold_time_method
            FROM listing_observations
            WHERE marketplace = ? AND listing_id = ?
            ORDER BY observed_at DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(marketplace)
        .bind(listing_id)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        row.map(ListingSnapshot::try_from).transpose()
    }

    /// Re-labels rows still marked unknown or never classified. Only rows
    /// whose labels actually change are counted, so an immediate second
    /// pass returns 0.
    pub async fn reclassify_unknown_rows(&self) -> Result<u64> {
        self.ensure_ready().await?;
        let mut tx = self.begin_write().await?;
        let updated = relabel_rows(&mut tx, RelabelScope::UnknownOrUnclassified).await?;
        tx.commit().await?;

        info!("Reclassified {updated} rows");
        Ok(updated)
    }

    /// Rows the reclassify pass would revisit.
    pub async fn count_unknown_rows(&self) -> Result<i64> {
        self.ensure_ready().await?;
        let count: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM listing_observations WHERE {}",
            RelabelScope::UnknownOrUnclassified.filter()
        ))
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    /// Detected models by row count, most frequent first, ties by name.
    pub async fn top_detected_models(&self, limit: usize) -> Result<Vec<(String, i64)>> {
        self.ensure_ready().await?;
        let rows = sqlx::query_as::<_, ModelCountRow>(
            r#"
            SELECT detected_model, COUNT(*) AS cnt
            FROM listing_observations
            GROUP BY detected_model
            ORDER BY cnt DESC, detected_model ASC
            LIMIT ?
            "#,
        )
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| (r.detected_model, r.cnt)).collect())
    }
}
