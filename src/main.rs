//! Pool report - computes dashboard metrics for a snapshot of provider data
//!
//! Reads pools (and optionally historical series) exported from the
//! liquidity data provider and prints the assembled metrics as JSON.

use anyhow::Result;
use clap::Parser;
use pool_rentability::*;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "pool-report", version, about = "Liquidity pool APR and metrics report")]
struct Cli {
    /// JSON array of raw pools
    #[arg(long)]
    pools: PathBuf,

    /// JSON object mapping pool id to historical data points
    #[arg(long)]
    history: Option<PathBuf>,

    /// apr | tvl | fees | volume (overrides POOL_SORT_BY)
    #[arg(long)]
    sort_by: Option<String>,

    /// asc | desc (overrides POOL_SORT_ORDER)
    #[arg(long)]
    order: Option<String>,

    /// Log the rentability breakdown for every pool
    #[arg(long)]
    rentability: bool,

    /// Write the report under <output>/reports
    #[arg(long)]
    save: bool,

    /// Root directory for logs and saved reports
    #[arg(long, default_value = utils::DEFAULT_OUTPUT_ROOT)]
    output: PathBuf,

    /// Debug-level engine logs unless RUST_LOG is set
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let layout = utils::OutputLayout::new(&cli.output);
    layout.create()?;
    let _logging_guard = utils::setup_logging(&layout.logs(), cli.verbose)?;

    let mut config = EngineConfig::from_env()?;
    if let Some(raw) = &cli.sort_by {
        config.sort_by = raw.parse().map_err(|e: String| EngineError::config("--sort-by", raw, e))?;
    }
    if let Some(raw) = &cli.order {
        config.sort_order = raw.parse().map_err(|e: String| EngineError::config("--order", raw, e))?;
    }

    info!("📋 Configuration:");
    info!("   Pool filter: {}", if config.pool_ids.is_empty() {
        "all pools".to_string()
    } else {
        config.pool_ids.join(", ")
    });
    info!("   Default range: {} days", config.default_range_days);
    info!("   Daily normalization: {}", config.daily_normalization);
    info!("   Sort: {} {}", config.sort_by, config.sort_order);

    let pools = storage::load_pools(&cli.pools)?;
    let history = match &cli.history {
        Some(path) => storage::load_history(path)?,
        None => HashMap::new(),
    };
    info!("Loaded {} pools, {} historical series", pools.len(), history.len());

    let metrics = build_pool_metrics(&pools, &history, &config);
    utils::print_pool_metrics(&metrics);

    if cli.rentability {
        for pool in pools.iter().filter(|p| metrics.iter().any(|m| m.id == p.id())) {
            let series = history.get(pool.id()).map(Vec::as_slice);
            let calculation = rentability::calculate_pool_rentability_with(pool, series, config.default_range_days);
            utils::print_rentability(pool.id(), &calculation);
        }
    }

    if cli.save {
        let path = storage::save_report(&layout.reports(), &metrics)?;
        info!("✅ Report written to {}", path.display());
    }

    println!("{}", serde_json::to_string_pretty(&metrics)?);
    Ok(())
}
