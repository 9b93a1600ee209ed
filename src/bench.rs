//! Latency sweep over square random corpora.
//!
//! For each corpus size `n` the sweep generates a fresh `n x n` corpus and
//! query per repeat, times only the search call, and reports the mean.

use std::fmt;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::core::distance_metric::DistanceMetric;
use crate::error::{Result, SearchError};
use crate::generate::{random_query, square_corpus};
use crate::Searcher;

/// Parameters of a latency sweep.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Smallest corpus size `n` (inclusive).
    pub min_size: usize,
    /// Largest corpus size `n` (inclusive).
    pub max_size: usize,
    /// Increment between sizes.
    pub step: usize,
    /// Query length.
    pub query_len: usize,
    /// Searches averaged per size.
    pub repeats: usize,
    /// RNG seed for data generation.
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            min_size: 0,
            max_size: 500,
            step: 50,
            query_len: 10,
            repeats: 100,
            seed: 0,
        }
    }
}

impl BenchConfig {
    /// # Errors
    /// Returns [`SearchError::InvalidParameter`] for a zero step, zero repeats
    /// or an inverted size range.
    pub fn validate(&self) -> Result<()> {
        if self.step == 0 {
            return Err(SearchError::InvalidParameter("step must be > 0".into()));
        }
        if self.repeats == 0 {
            return Err(SearchError::InvalidParameter("repeats must be > 0".into()));
        }
        if self.min_size > self.max_size {
            return Err(SearchError::InvalidParameter(format!(
                "min_size ({}) exceeds max_size ({})",
                self.min_size, self.max_size
            )));
        }
        Ok(())
    }

    /// Corpus sizes visited by the sweep.
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        (self.min_size..=self.max_size).step_by(self.step.max(1))
    }
}

/// Mean search latency for one corpus size.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub size: usize,
    pub query_len: usize,
    pub repeats: usize,
    /// Mean wall-clock time per search in milliseconds.
    pub mean_ms: f64,
    /// Number of matches returned by the final repeat.
    pub last_match_count: usize,
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Size of n: {}", self.size)?;
        writeln!(f, "Time taken: {:.4}ms.", self.mean_ms)
    }
}

/// Run the sweep described by `config` with `searcher`.
///
/// # Errors
/// Returns an error if `config` is invalid.
pub fn run_sweep<M: DistanceMetric>(
    searcher: &Searcher<M>,
    config: &BenchConfig,
) -> Result<Vec<BenchReport>> {
    config.validate()?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut reports = Vec::new();
    for size in config.sizes() {
        let mut total_ms = 0.0;
        let mut last_match_count = 0;

        for _ in 0..config.repeats {
            let corpus = square_corpus(size, &mut rng);
            let query = random_query(config.query_len, &mut rng);

            let start = Instant::now();
            let result = searcher.search(&corpus, &query);
            total_ms += start.elapsed().as_secs_f64() * 1000.0;

            last_match_count = result.len();
        }

        let report = BenchReport {
            size,
            query_len: config.query_len,
            repeats: config.repeats,
            mean_ms: total_ms / config.repeats as f64,
            last_match_count,
        };
        tracing::info!(
            size,
            mean_ms = report.mean_ms,
            matches = last_match_count,
            "benchmarked corpus size"
        );
        reports.push(report);
    }

    Ok(reports)
}
