//! OptiSol series demo binary
//!
//! Synthesizes one series report and prints it as JSON to stdout, the same
//! payload the dashboard renders.
//!
//! # Usage
//!
//! ```bash
//! SERIES_WINDOW=1w SERIES_ANCHOR=2025-03-10 cargo run --bin series-demo
//! ```
//!
//! # Environment Variables
//!
//! - `SERIES_WINDOW`: window selector (1d, 1w, 1m, 3m, 6m, 12m; default: 12m)
//! - `SERIES_ANCHOR`: anchor date as YYYY-MM-DD (default: Jan 1 of the reference year)
//! - `OPTISOL_SERIES_CONFIG`: path to a series.toml (default: built-in seasons)
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use optisol_series::config::SeriesConfig;
use optisol_series::routes::series::get_series_data;
use optisol_series::services::{format_percent, SeriesEngine};

fn main() -> anyhow::Result<()> {
    // Initialize logging (stderr, so stdout stays pure JSON)
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = SeriesConfig::from_env_or_default()?;
    let engine = SeriesEngine::new(&config)?;
    info!(
        "Series engine initialized for reference year {}",
        engine.reference_year().year()
    );

    let window = env::var("SERIES_WINDOW").unwrap_or_else(|_| "12m".to_string());
    let anchor = env::var("SERIES_ANCHOR").ok().filter(|s| !s.trim().is_empty());

    let report = get_series_data(&engine, anchor.as_deref(), &window)?;
    info!(
        "{}: {} points, avg delta {:.1}°C, demo gain {}",
        report.series.range_label,
        report.series.points.len(),
        report.summary.avg_delta,
        format_percent(report.summary.demo_score)
    );
    info!("Season coverage: {}", report.summary.coverage_line());

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
