mod bootstrap;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;

use launch_core::models::{Granularity, PeriodBucket};
use launch_core::time_utils::{resolve_timezone, system_timezone};
use launch_data::aggregator::cumulative_launches_by_period;
use launch_data::catalog::{build_launch_records, read_catalog};

/// Cumulative launch counts per calendar period from a GCAT launch catalog
#[derive(Parser, Debug, Clone)]
#[command(
    name = "launch-trends",
    about = "Cumulative launch counts per calendar period from a GCAT launch catalog",
    version
)]
struct Settings {
    /// Path to the catalog TSV file (e.g. Electron.tsv)
    #[arg(long)]
    data: PathBuf,

    /// Period granularity
    #[arg(long, default_value = "quarter")]
    period: Granularity,

    /// Start date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// End date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    end_date: Option<NaiveDate>,

    /// Analysis timezone ("local" uses the system timezone)
    #[arg(long, default_value = "America/New_York")]
    timezone: String,

    /// Output format
    #[arg(long, default_value = "table", value_parser = ["table", "json"])]
    format: String,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    log_level: String,
}

fn main() -> Result<()> {
    let settings = Settings::parse();
    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("launch-trends v{} starting", env!("CARGO_PKG_VERSION"));

    let tz_name = if settings.timezone == "local" {
        system_timezone()
    } else {
        settings.timezone.clone()
    };
    let tz = resolve_timezone(&tz_name)?;

    let rows = read_catalog(&settings.data)?;
    tracing::info!(
        "{} catalog rows read from {}",
        rows.len(),
        settings.data.display()
    );

    let records = build_launch_records(rows, tz);
    let buckets = cumulative_launches_by_period(
        &records,
        settings.period,
        settings.start_date,
        settings.end_date,
    );

    match settings.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&buckets)?),
        _ => print_table(&buckets),
    }

    Ok(())
}

/// Print the bucket series as an aligned text table, newest period first.
fn print_table(buckets: &[PeriodBucket]) {
    if buckets.is_empty() {
        println!("No launches in the selected range.");
        return;
    }

    println!("{:<10} {:<26} {:>10}", "Period", "Period start", "Cumulative");
    for bucket in buckets.iter().rev() {
        println!(
            "{:<10} {:<26} {:>10}",
            bucket.label,
            bucket.period_start.format("%Y-%m-%d %H:%M %Z"),
            bucket.cumulative_count
        );
    }
}
