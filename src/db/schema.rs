use sqlx::SqliteConnection;
use tracing::{debug, info};

use crate::db::models::LabelRow;
use crate::detector::{canonical_item_name, classify_listing};
use crate::error::Result;
use crate::types::Listing;

const CREATE_STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS listing_observations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        observed_at TEXT NOT NULL,
        marketplace TEXT NOT NULL,
        item_name TEXT NOT NULL,
        search_city TEXT NOT NULL,
        search_phrase TEXT NOT NULL,
        listing_id TEXT NOT NULL,
        post_url TEXT NOT NULL,
        title TEXT NOT NULL,
        price_text TEXT NOT NULL,
        price_value REAL,
        currency TEXT,
        location TEXT,
        seller TEXT,
        item_condition TEXT,
        description TEXT,
        detected_model TEXT NOT NULL DEFAULT 'unknown',
        listing_type TEXT NOT NULL DEFAULT 'other',
        is_target_exact INTEGER NOT NULL DEFAULT 0,
        classification_confidence REAL,
        classification_reason TEXT,
        availability TEXT NOT NULL,
        sold_estimated_at TEXT,
        sold_time_method TEXT,
        UNIQUE(observed_at, marketplace, listing_id, availability)
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_listing_obs_lookup
    ON listing_observations (item_name, marketplace, search_city, availability)
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS market_price (
        item_name TEXT NOT NULL,
        marketplace TEXT NOT NULL,
        search_city TEXT NOT NULL,
        window_days INTEGER NOT NULL,
        sample_size INTEGER NOT NULL,
        msrp_estimate REAL,
        currency TEXT,
        updated_at TEXT NOT NULL,
        PRIMARY KEY (item_name, marketplace, search_city, window_days)
    )
    "#,
];

/// Columns added after the first release. Older files get them via
/// `ALTER TABLE ... ADD COLUMN`.
pub const LATE_COLUMNS: &[(&str, &str)] = &[
    ("detected_model", "TEXT NOT NULL DEFAULT 'unknown'"),
    ("listing_type", "TEXT NOT NULL DEFAULT 'other'"),
    ("is_target_exact", "INTEGER NOT NULL DEFAULT 0"),
    ("classification_confidence", "REAL"),
    ("classification_reason", "TEXT"),
    ("sold_estimated_at", "TEXT"),
    ("sold_time_method", "TEXT"),
];

/// Indexes over late columns; built once those columns exist.
const LATE_INDEXES: &[&str] = &[
    r#"
    CREATE INDEX IF NOT EXISTS idx_listing_obs_sold_time
    ON listing_observations (sold_estimated_at, observed_at)
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_listing_obs_target_exact
    ON listing_observations (item_name, marketplace, search_city, availability, is_target_exact)
    "#,
];

/// Which rows a relabel pass visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelabelScope {
    /// Rows written before classification existed.
    Unclassified,
    /// Rows still labelled unknown, plus unclassified ones.
    UnknownOrUnclassified,
}

impl RelabelScope {
    pub(crate) fn filter(self) -> &'static str {
        match self {
            RelabelScope::Unclassified => "classification_reason IS NULL",
            RelabelScope::UnknownOrUnclassified => {
                "COALESCE(detected_model, 'unknown') = 'unknown' OR classification_reason IS NULL"
            }
        }
    }
}

/// Creates tables, adds missing columns, labels legacy rows, then builds the
/// late indexes. Idempotent.
pub async fn ensure_schema(conn: &mut SqliteConnection) -> Result<()> {
    for statement in CREATE_STATEMENTS {
        sqlx::query(statement).execute(&mut *conn).await?;
    }

    let added = add_missing_columns(conn).await?;
    let backfilled = relabel_rows(conn, RelabelScope::Unclassified).await?;
    for statement in LATE_INDEXES {
        sqlx::query(statement).execute(&mut *conn).await?;
    }

    if added > 0 || backfilled > 0 {
        info!("Schema migrated: {added} columns added, {backfilled} legacy rows classified");
    } else {
        debug!("Schema up to date");
    }
    Ok(())
}

async fn add_missing_columns(conn: &mut SqliteConnection) -> Result<usize> {
    let existing: Vec<String> =
        sqlx::query_scalar("SELECT name FROM pragma_table_info('listing_observations')")
            .fetch_all(&mut *conn)
            .await?;

    let mut added = 0;
    for (column, definition) in LATE_COLUMNS {
        if existing.iter().any(|name| name == column) {
            continue;
        }
        sqlx::query(&format!(
            "ALTER TABLE listing_observations ADD COLUMN {column} {definition}"
        ))
        .execute(&mut *conn)
        .await?;
        info!("Added column listing_observations.{column}");
        added += 1;
    }
    Ok(added)
}

/// Re-runs classification on every row in `scope` against the row's stored
/// item name. Rows whose labels come out identical are left alone; returns
/// how many rows changed.
pub(crate) async fn relabel_rows(conn: &mut SqliteConnection, scope: RelabelScope) -> Result<u64> {
    let filter = scope.filter();
    let rows = sqlx::query_as::<_, LabelRow>(&format!(
        r#"
        SELECT id, item_name, title, description, detected_model, listing_type,
               is_target_exact, classification_confidence, classification_reason
        FROM listing_observations
        WHERE {filter}
        "#
    ))
    .fetch_all(&mut *conn)
    .await?;

    let mut updated = 0u64;
    for row in rows {
        let listing = Listing {
            title: row.title,
            description: row.description.unwrap_or_default(),
            ..Listing::default()
        };
        let result = classify_listing(&listing, &row.item_name);
        let item_name = canonical_item_name(&row.item_name, &result.detected_model);
        let listing_type = result.listing_type.to_string();

        let unchanged = row.item_name == item_name
            && row.detected_model.as_deref() == Some(result.detected_model.as_str())
            && row.listing_type.as_deref() == Some(listing_type.as_str())
            && row.is_target_exact == Some(result.is_target_exact)
            && row.classification_confidence == Some(result.confidence)
            && row.classification_reason.as_deref() == Some(result.reason.as_str());
        if unchanged {
            continue;
        }

        sqlx::query(
            r#"
            UPDATE listing_observations
            SET item_name = ?,
                detected_model = ?,
                listing_type = ?,
                is_target_exact = ?,
                classification_confidence = ?,
                classification_reason = ?
            WHERE id = ?
            "#,
        )
        .bind(&item_name)
        .bind(&result.detected_model)
        .bind(&listing_type)
        .bind(result.is_target_exact)
        .bind(result.confidence)
        .bind(&result.reason)
        .bind(row.id)
        .execute(&mut *conn)
        .await?;
        updated += 1;
    }
    Ok(updated)
}
