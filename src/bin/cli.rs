//! Housing Prep CLI - Clean a housing CSV and split it for model training

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use polars::prelude::DataFrame;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use housing_prep::data::null_counts;
use housing_prep::{DatasetPreparer, PrepConfig};

/// Default input path (relative to project root)
const DEFAULT_DATA_PATH: &str = "data/input/train.csv";

#[derive(Parser)]
#[command(name = "housing-prep")]
#[command(author, version, about = "Housing dataset preparation CLI", long_about = None)]
struct Cli {
    /// Path to the input CSV
    #[arg(default_value = DEFAULT_DATA_PATH)]
    data_path: PathBuf,

    /// Target column (defaults to the configured target)
    #[arg(short, long)]
    target: Option<String>,

    /// Comma-separated predictor columns (defaults to every non-target column)
    #[arg(short, long, value_delimiter = ',')]
    predictors: Option<Vec<String>>,

    /// JSON file overriding the default configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    println!("{}", "Housing Prep CLI v0.1.0".cyan().bold());
    println!();

    let config = match &cli.config {
        Some(path) => PrepConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => PrepConfig::default(),
    };

    let mut preparer = DatasetPreparer::with_config(&cli.data_path, config)
        .with_context(|| format!("Failed to load CSV from {:?}", cli.data_path))?;

    let (rows, cols) = preparer.shape();
    println!("{}: {} rows x {} columns", "Loaded".green(), rows, cols);

    preparer.clean_data().context("Failed to clean data")?;

    let (rows, cols) = preparer.shape();
    println!("{}: {} rows x {} columns", "Cleaned".green(), rows, cols);
    print_remaining_nulls(preparer.data());

    let split = preparer
        .prepare_features(cli.target.as_deref(), cli.predictors.as_deref())
        .context("Failed to prepare features")?;

    let Some(split) = split else {
        println!(
            "{}",
            "Not enough data to split into train and test sets.".red()
        );
        return Ok(());
    };

    println!();
    println!("{}", "Partitions:".yellow().bold());
    println!("{:<10} {:>8} {:>8}", "Set", "Rows", "Columns");
    println!("{}", "-".repeat(28));
    for (name, df) in [
        ("X_train", &split.x_train),
        ("X_test", &split.x_test),
        ("y_train", &split.y_train),
        ("y_test", &split.y_test),
    ] {
        println!("{:<10} {:>8} {:>8}", name, df.height(), df.width());
    }

    Ok(())
}

/// Columns that still contain nulls (those outside the imputation rules)
fn print_remaining_nulls(df: &DataFrame) {
    let remaining: Vec<(String, usize)> = null_counts(df)
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .collect();

    if remaining.is_empty() {
        println!("{}", "No null values remain.".dimmed());
        return;
    }

    println!();
    println!("{}", "Remaining nulls:".yellow().bold());
    for (name, count) in remaining {
        println!("  {:<16} {:>6}", name, count);
    }
}
