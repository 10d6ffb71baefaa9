use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use camera_market::config::Config;
use camera_market::error::Result;
use camera_market::{MarketPriceAggregator, ObservationStore};

#[tokio::main]
async fn main() {
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cfg.log_level))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cfg).await {
        error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

async fn run(cfg: Config) -> Result<()> {
    if cfg.price_targets.is_empty() {
        warn!("PRICE_TARGETS not set, nothing to refresh. Example: PRICE_TARGETS=sony_a7c2:facebook:vancouver");
        return Ok(());
    }

    let store = ObservationStore::open(&cfg.db_path).await?;
    let aggregator = MarketPriceAggregator::new(store);

    let summaries = aggregator
        .refresh_all(&cfg.price_targets, cfg.price_window_days)
        .await;
    info!(
        "Refreshed {}/{} price targets over {} days",
        summaries.len(),
        cfg.price_targets.len(),
        cfg.price_window_days,
    );

    for s in &summaries {
        let price = s
            .msrp_estimate
            .map(|p| format!("{p:.2}"))
            .unwrap_or_else(|| "n/a".to_string());
        println!(
            "{}:{}:{} window={}d samples={} price={} currency={}",
            s.item_name,
            s.marketplace,
            s.search_city,
            s.window_days,
            s.sample_size,
            price,
            s.currency.as_deref().unwrap_or("n/a"),
        );
    }
    Ok(())
}
