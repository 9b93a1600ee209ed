//! Command-line interface for subseries-rs.
//!
//! - **bench**: time searches over square random corpora of growing size
//! - **search**: run one search over random data and print the matches
//!
//! ```text
//! # Classic sweep: n = 0, 50, ..., 500, query length 10, 100 repeats
//! subseries-rs bench
//!
//! # One search, JSON output
//! subseries-rs search --series 200 --length 200 --query-len 10 --format json
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use subseries_rs::bench::{run_sweep, BenchConfig, BenchReport};
use subseries_rs::generate::{random_corpus, random_query};
use subseries_rs::{Match, SearchConfig, SquaredSearcher};

#[derive(Parser)]
#[command(name = "subseries-rs")]
#[command(version)]
#[command(about = "Exact early-abandoned nearest-subsequence search")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report mean search latency over a range of corpus sizes
    Bench(BenchArgs),
    /// Search random data once and print every match
    Search(SearchArgs),
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Args)]
pub struct BenchArgs {
    /// Smallest corpus size n (corpus is n x n)
    #[arg(long, default_value = "0")]
    pub min_size: usize,

    /// Largest corpus size n
    #[arg(long, default_value = "500")]
    pub max_size: usize,

    /// Increment between corpus sizes
    #[arg(long, default_value = "50")]
    pub step: usize,

    /// Query length
    #[arg(long, default_value = "10")]
    pub query_len: usize,

    /// Searches averaged per size
    #[arg(long, default_value = "100")]
    pub repeats: usize,

    /// RNG seed
    #[arg(long, default_value = "0")]
    pub seed: u64,

    /// Search corpus members in parallel
    #[arg(long)]
    pub parallel: bool,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Number of corpus members
    #[arg(long, default_value = "100")]
    pub series: usize,

    /// Length of each member
    #[arg(long, default_value = "100")]
    pub length: usize,

    /// Query length
    #[arg(long, default_value = "10")]
    pub query_len: usize,

    /// RNG seed
    #[arg(long, default_value = "0")]
    pub seed: u64,

    /// Search corpus members in parallel
    #[arg(long)]
    pub parallel: bool,
}

/// Execute the bench command.
///
/// # Errors
///
/// Returns an error if the sweep parameters are invalid.
#[allow(clippy::needless_pass_by_value)]
pub fn run_bench(args: BenchArgs, format: OutputFormat) -> anyhow::Result<()> {
    let config = BenchConfig {
        min_size: args.min_size,
        max_size: args.max_size,
        step: args.step,
        query_len: args.query_len,
        repeats: args.repeats,
        seed: args.seed,
    };
    let searcher = SquaredSearcher::new(SearchConfig::new().with_parallel(args.parallel));

    let reports: Vec<BenchReport> = run_sweep(&searcher, &config)?;

    match format {
        OutputFormat::Text => {
            for report in &reports {
                println!("{report}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct SearchOutput {
    series: usize,
    length: usize,
    query_len: usize,
    distance: Option<f64>,
    matches: Vec<Match>,
}

/// Execute the search command.
///
/// # Errors
///
/// Returns an error if generated data fails validation or output cannot be
/// serialized.
#[allow(clippy::needless_pass_by_value)]
pub fn run_search(args: SearchArgs, format: OutputFormat) -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(args.seed);
    let corpus = random_corpus(args.series, args.length, &mut rng);
    let query = random_query(args.query_len, &mut rng);

    let searcher = SquaredSearcher::new(SearchConfig::new().with_parallel(args.parallel));
    let result = searcher.search_checked(&corpus, &query)?;

    match format {
        OutputFormat::Text => {
            if result.is_empty() {
                println!("No matches (query length must be shorter than series length)");
            }
            for m in &result.matches {
                println!("{m}");
            }
            if let Some(d) = result.distance {
                println!("Distance: {d}");
            }
        }
        OutputFormat::Json => {
            let output = SearchOutput {
                series: args.series,
                length: args.length,
                query_len: args.query_len,
                distance: result.distance,
                matches: result.matches,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
