use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use data_loader::output_path;
use pipeline::{filter_films, FilterOptions, RuleResults};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Name of the input file looked up next to the executable
const DEFAULT_INPUT: &str = "films.csv";

/// Input used when there is no films.csv next to the executable
const FALLBACK_INPUT: &str = "data/films.csv";

/// Rule whose matching titles are listed at debug level
const LEO_COBB_RULE: &str = "filtered_films_3";

/// film-filter - derive filtered film tables from a CSV of films
#[derive(Parser)]
#[command(name = "film-filter")]
#[command(about = "Writes filtered_films_1.csv .. filtered_films_7.csv next to the input", long_about = None)]
struct Cli {
    /// Input CSV (defaults to films.csv next to the executable, then data/films.csv)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Evaluate the rules in parallel
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let input = match cli.input {
        Some(path) => path,
        None => default_input()?,
    };
    let options = FilterOptions {
        parallel: cli.parallel,
    };
    info!("Input: {} (parallel: {})", input.display(), options.parallel);

    let start = Instant::now();
    let results = filter_films(&input, &options)
        .with_context(|| format!("Failed to filter {}", input.display()))?;

    if let Some(matches) = results.get(LEO_COBB_RULE) {
        debug!(
            "Filtered by 'Leo' and 'Cobb': {:?}",
            matches.column_values("title").unwrap_or_default()
        );
    }

    print_summary(&results, &input);
    println!("{} Done in {:?}", "✓".green(), start.elapsed());

    Ok(())
}

/// Default input for a run without `--input`
fn default_input() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(resolve_default_input(dir))
}

/// `films.csv` in `exe_dir` when it exists, otherwise `data/films.csv`
/// relative to the working directory
fn resolve_default_input(exe_dir: &Path) -> PathBuf {
    let beside = exe_dir.join(DEFAULT_INPUT);
    if beside.is_file() {
        beside
    } else {
        PathBuf::from(FALLBACK_INPUT)
    }
}

/// One line per output: name, row count and where it was written
fn print_summary(results: &RuleResults, input: &Path) {
    println!("{}", "Filtered films:".bold().blue());
    for (name, table) in results.iter() {
        println!(
            "{}{}: {} rows -> {}",
            "• ".green(),
            name,
            table.len(),
            output_path(input, name).display()
        );
    }
}
