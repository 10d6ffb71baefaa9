use chrono::{DateTime, Duration, Utc};
use tempfile::TempDir;

use camera_market::time::utc_now;
use camera_market::types::{Availability, Listing, ObservationContext};
use camera_market::{MarketPriceAggregator, ObservationStore};

fn listing(id: &str, price: &str, title: &str, description: &str) -> Listing {
    Listing {
        marketplace: "facebook".to_string(),
        id: id.to_string(),
        title: title.to_string(),
        price: price.to_string(),
        post_url: format!("https://www.facebook.com/marketplace/item/{id}"),
        location: "Vancouver, BC".to_string(),
        seller: "seller".to_string(),
        condition: "used_like_new".to_string(),
        description: description.to_string(),
    }
}

fn a7c2(id: &str, price: &str) -> Listing {
    listing(id, price, "Sony A7C II", "Sony A7C II body only.")
}

fn ctx(availability: &str) -> ObservationContext {
    ObservationContext {
        item_name: "sony_a7c2".to_string(),
        search_city: "vancouver".to_string(),
        search_phrase: "sony a7c2".to_string(),
        availability: Availability::from(availability),
    }
}

fn base_time() -> DateTime<Utc> {
    utc_now() - Duration::days(1)
}

async fn setup() -> (TempDir, ObservationStore, MarketPriceAggregator) {
    let dir = tempfile::tempdir().unwrap();
    let store = ObservationStore::open(dir.path().join("market_data.db"))
        .await
        .unwrap();
    let aggregator = MarketPriceAggregator::new(store.clone());
    (dir, store, aggregator)
}

#[tokio::test]
async fn refresh_from_recent_sold_rows() {
    let (_dir, store, aggregator) = setup().await;

    store.record_observation(&a7c2("sold-1", "$1800"), &ctx("out")).await.unwrap();
    store.record_observation(&a7c2("sold-2", "$2200"), &ctx("out")).await.unwrap();

    let summary = aggregator
        .refresh_market_price("sony_a7c2", "facebook", "vancouver", 30)
        .await
        .unwrap();
    assert_eq!(summary.sample_size, 2);
    assert_eq!(summary.msrp_estimate, Some(2000.0));
    assert_eq!(summary.currency.as_deref(), Some("$"));

    let stored = aggregator
        .get_market_price("sony_a7c2", "facebook", "vancouver", 30)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored, summary);
}

#[tokio::test]
async fn only_exact_target_camera_bodies_count() {
    let (_dir, store, aggregator) = setup().await;
    let t0 = base_time();

    let rows = [
        ("target-1", "$1800", "Sony A7C II body", "Sony A7C II in great condition."),
        ("other-1", "$1000", "Sony RX1R compact camera", "Sony RX1R camera body."),
        (
            "plate-1",
            "$60",
            "SmallRig A7C II Quick Release Plate",
            "Quick release plate for Sony A7C II.",
        ),
    ];
    for (id, price, title, description) in rows {
        store
            .record_observation_at(&listing(id, price, title, description), &ctx("out"), t0)
            .await
            .unwrap();
    }

    let summary = aggregator
        .refresh_market_price_at("sony_a7c2", "facebook", "vancouver", 30, utc_now())
        .await
        .unwrap();
    assert_eq!(summary.sample_size, 1);
    assert_eq!(summary.msrp_estimate, Some(1800.0));
    assert_eq!(summary.currency.as_deref(), Some("$"));
}

#[tokio::test]
async fn deduplicates_by_latest_out_row_per_listing() {
    let (_dir, store, aggregator) = setup().await;
    let t0 = base_time();

    store
        .record_observation_at(&a7c2("dup-1", "$1800"), &ctx("out"), t0)
        .await
        .unwrap();
    store
        .record_observation_at(&a7c2("dup-1", "$1700"), &ctx("out"), t0 + Duration::minutes(5))
        .await
        .unwrap();
    store
        .record_observation_at(&a7c2("dup-2", "$1900"), &ctx("out"), t0 + Duration::minutes(10))
        .await
        .unwrap();

    let summary = aggregator
        .refresh_market_price_at("sony_a7c2", "facebook", "vancouver", 30, utc_now())
        .await
        .unwrap();
    assert_eq!(summary.sample_size, 2);
    assert_eq!(summary.msrp_estimate, Some(1800.0));
}

#[tokio::test]
async fn excludes_listings_that_reappear_in_stock() {
    let (_dir, store, aggregator) = setup().await;
    let t0 = base_time();

    store
        .record_observation_at(&a7c2("flip-1", "$1800"), &ctx("out"), t0)
        .await
        .unwrap();
    store
        .record_observation_at(&a7c2("flip-1", "$1800"), &ctx("all"), t0 + Duration::minutes(2))
        .await
        .unwrap();
    store
        .record_observation_at(&a7c2("flip-2", "$2100"), &ctx("out"), t0 + Duration::minutes(4))
        .await
        .unwrap();

    let summary = aggregator
        .refresh_market_price_at("sony_a7c2", "facebook", "vancouver", 30, utc_now())
        .await
        .unwrap();
    assert_eq!(summary.sample_size, 1);
    assert_eq!(summary.msrp_estimate, Some(2100.0));
}

#[tokio::test]
async fn aggregates_model_found_by_another_search() {
    let (_dir, store, aggregator) = setup().await;

    store
        .record_observation_at(
            &listing(
                "a7c-from-a7c2-search",
                "$1600",
                "Sony A7C full-frame camera",
                "Sony A7C camera body in excellent condition.",
            ),
            &ctx("out"),
            base_time(),
        )
        .await
        .unwrap();

    let summary = aggregator
        .refresh_market_price_at("sony_a7c", "facebook", "vancouver", 30, utc_now())
        .await
        .unwrap();
    assert_eq!(summary.sample_size, 1);
    assert_eq!(summary.msrp_estimate, Some(1600.0));

    let target = aggregator
        .refresh_market_price_at("sony_a7c2", "facebook", "vancouver", 30, utc_now())
        .await
        .unwrap();
    assert_eq!(target.sample_size, 0);
}

#[tokio::test]
async fn window_excludes_old_sales_and_upsert_replaces() {
    let (_dir, store, aggregator) = setup().await;
    let now = utc_now();

    store
        .record_observation_at(&a7c2("old-1", "$1500"), &ctx("out"), now - Duration::days(40))
        .await
        .unwrap();

    let empty = aggregator
        .refresh_market_price_at("sony_a7c2", "facebook", "vancouver", 30, now)
        .await
        .unwrap();
    assert_eq!(empty.sample_size, 0);
    assert_eq!(empty.msrp_estimate, None);
    assert_eq!(empty.currency, None);

    let wide = aggregator
        .refresh_market_price_at("sony_a7c2", "facebook", "vancouver", 60, now)
        .await
        .unwrap();
    assert_eq!(wide.sample_size, 1);

    store
        .record_observation_at(&a7c2("new-1", "$1900"), &ctx("out"), now - Duration::days(2))
        .await
        .unwrap();
    let later = now + Duration::minutes(1);
    aggregator
        .refresh_market_price_at("sony_a7c2", "facebook", "vancouver", 30, later)
        .await
        .unwrap();

    let stored = aggregator
        .get_market_price("sony_a7c2", "facebook", "vancouver", 30)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.sample_size, 1);
    assert_eq!(stored.msrp_estimate, Some(1900.0));
    assert_eq!(stored.updated_at, later);

    assert!(aggregator
        .get_market_price("sony_a7c2", "facebook", "vancouver", 7)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn currency_tie_breaks_lexicographically() {
    let (_dir, store, aggregator) = setup().await;
    let t0 = base_time();

    store
        .record_observation_at(&a7c2("cad-1", "CA$2,000"), &ctx("out"), t0)
        .await
        .unwrap();
    store
        .record_observation_at(&a7c2("usd-1", "$1,600"), &ctx("out"), t0)
        .await
        .unwrap();

    let summary = aggregator
        .refresh_market_price_at("sony_a7c2", "facebook", "vancouver", 30, utc_now())
        .await
        .unwrap();
    assert_eq!(summary.sample_size, 2);
    assert_eq!(summary.msrp_estimate, Some(1800.0));
    assert_eq!(summary.currency.as_deref(), Some("$"));
}

#[tokio::test]
async fn other_city_is_not_mixed_in() {
    let (_dir, store, aggregator) = setup().await;
    let mut toronto = ctx("out");
    toronto.search_city = "toronto".to_string();

    store
        .record_observation_at(&a7c2("yyz-1", "$1700"), &toronto, base_time())
        .await
        .unwrap();

    let summary = aggregator
        .refresh_market_price_at("sony_a7c2", "facebook", "vancouver", 30, utc_now())
        .await
        .unwrap();
    assert_eq!(summary.sample_size, 0);
}

#[tokio::test]
async fn maximum_window_covers_every_sale() {
    let (_dir, store, aggregator) = setup().await;
    let now = utc_now();

    store
        .record_observation_at(&a7c2("old-1", "$1500"), &ctx("out"), now - Duration::days(40))
        .await
        .unwrap();
    store
        .record_observation_at(&a7c2("new-1", "$1900"), &ctx("out"), now - Duration::days(2))
        .await
        .unwrap();

    let summary = aggregator
        .refresh_market_price_at("sony_a7c2", "facebook", "vancouver", u32::MAX, now)
        .await
        .unwrap();
    assert_eq!(summary.sample_size, 2);
    assert_eq!(summary.msrp_estimate, Some(1700.0));

    let stored = aggregator
        .get_market_price("sony_a7c2", "facebook", "vancouver", u32::MAX)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.window_days, u32::MAX);
}
