use tracing::error;
use tracing_subscriber::EnvFilter;

use camera_market::config::Config;
use camera_market::error::Result;
use camera_market::ObservationStore;

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

/// Re-labels unknown rows with the current detection rules and prints a
/// before/after report to stdout.
async fn run(cfg: Config) -> Result<()> {
    let store = ObservationStore::open(&cfg.db_path).await?;

    let unknown_before = store.count_unknown_rows().await?;
    let updated = store.reclassify_unknown_rows().await?;
    let unknown_after = store.count_unknown_rows().await?;
    let top_models = store.top_detected_models(cfg.top_models_limit).await?;

    println!("db_path={}", store.db_path().display());
    println!("updated_rows={updated}");
    println!("unknown_before={unknown_before}");
    println!("unknown_after={unknown_after}");
    println!("top_detected_models:");
    for (model, count) in top_models {
        println!("  {model}: {count}");
    }
    Ok(())
}
