//! # subseries-rs
//!
//! Exact nearest-subsequence search over a collection of equal-length series.
//!
//! Given a corpus and a query of length `k`, every window of length `k` in
//! every member is compared with the query and all windows at the minimum
//! distance are returned. The scan abandons a window as soon as its partial
//! distance exceeds the best distance seen so far, and keeps every exact tie.

pub mod algorithms;
pub mod bench;
pub mod core;
pub mod error;
pub mod generate;
pub mod metrics;

pub use crate::algorithms::corpus::{search, validate};
#[cfg(feature = "parallel")]
pub use crate::algorithms::corpus::search_parallel;
pub use crate::algorithms::window::find_best_offsets;
pub use crate::core::config::SearchConfig;
pub use crate::core::distance_metric::DistanceMetric;
pub use crate::core::search_state::{Match, SearchResult, SearchState, WindowMatch};
pub use crate::error::{Result, SearchError};
pub use crate::metrics::manhattan::Manhattan;
pub use crate::metrics::squared::SquaredEuclidean;

/// High-level facade for corpus search, generic over distance metric.
///
/// # Examples
///
/// ```
/// use subseries_rs::{Match, SearchConfig, SquaredSearcher};
///
/// let corpus = vec![vec![1.0, 2.0, 3.0, 4.0], vec![4.0, 3.0, 2.0, 1.0]];
/// let searcher = SquaredSearcher::new(SearchConfig::new());
/// let result = searcher.search(&corpus, &[3.0, 4.0]);
/// assert_eq!(result.matches, vec![Match::new(0, 2)]);
/// assert_eq!(result.distance, Some(0.0));
/// ```
#[derive(Debug, Clone)]
pub struct Searcher<M: DistanceMetric> {
    config: SearchConfig,
    _metric: std::marker::PhantomData<M>,
}

impl<M: DistanceMetric> Default for Searcher<M> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<M: DistanceMetric> Searcher<M> {
    /// Create a new searcher with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            _metric: std::marker::PhantomData,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search `corpus` for the windows closest to `query`.
    ///
    /// Uses the parallel path when enabled in the config and compiled in.
    /// Both paths return identical results.
    pub fn search<S: AsRef<[f64]> + Sync>(&self, corpus: &[S], query: &[f64]) -> SearchResult {
        #[cfg(feature = "parallel")]
        let result = if self.config.parallel {
            search_parallel::<M, S>(corpus, query, self.config.min_series_per_task)
        } else {
            search::<M, S>(corpus, query)
        };
        #[cfg(not(feature = "parallel"))]
        let result = search::<M, S>(corpus, query);

        result
    }

    /// Matches only, ordered by series then offset.
    pub fn find_matches<S: AsRef<[f64]> + Sync>(&self, corpus: &[S], query: &[f64]) -> Vec<Match> {
        self.search(corpus, query).matches
    }

    /// Validate the corpus and query, then search.
    ///
    /// # Errors
    /// Returns an error if the corpus members differ in length or any value
    /// is NaN or infinite.
    pub fn search_checked<S: AsRef<[f64]> + Sync>(
        &self,
        corpus: &[S],
        query: &[f64],
    ) -> Result<SearchResult> {
        validate(corpus, query)?;
        Ok(self.search(corpus, query))
    }

    /// Scan a single candidate sequence against `query` with a caller-held
    /// threshold. See [`find_best_offsets`].
    pub fn scan(&self, candidate: &[f64], query: &[f64], best_so_far: f64) -> WindowMatch {
        find_best_offsets::<M>(candidate, query, best_so_far)
    }
}

/// Convenience type alias for the default squared Euclidean search.
pub type SquaredSearcher = Searcher<SquaredEuclidean>;

/// Convenience type alias for Manhattan (L1) search.
pub type ManhattanSearcher = Searcher<Manhattan>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_matches_exact_window() {
        let corpus = vec![vec![1.0, 2.0, 3.0, 4.0], vec![4.0, 3.0, 2.0, 1.0]];
        let matches = SquaredSearcher::default().find_matches(&corpus, &[3.0, 4.0]);
        assert_eq!(matches, vec![Match::new(0, 2)]);
    }

    #[test]
    fn test_scan_with_finite_threshold() {
        let searcher = SquaredSearcher::default();
        // Windows: [9,1] -> 82, [1,0] -> 1, [0,4] -> 16
        let wm = searcher.scan(&[9.0, 1.0, 0.0, 4.0], &[0.0, 0.0], 5.0);
        assert_eq!(wm.distance, 1.0);
        assert_eq!(wm.offsets, vec![1]);

        let lost = searcher.scan(&[9.0, 9.0, 9.0], &[0.0, 0.0], 5.0);
        assert_eq!(lost.distance, 5.0);
        assert!(lost.offsets.is_empty());
    }

    #[test]
    fn test_search_checked_rejects_ragged_corpus() {
        let corpus = vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0]];
        let err = SquaredSearcher::default()
            .search_checked(&corpus, &[1.0])
            .unwrap_err();
        assert_eq!(
            err,
            SearchError::RaggedCorpus {
                index: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_search_checked_rejects_non_finite_query() {
        let corpus = vec![vec![1.0, 2.0, 3.0]];
        let err = SquaredSearcher::default()
            .search_checked(&corpus, &[0.0, f64::NAN])
            .unwrap_err();
        assert_eq!(err, SearchError::NonFiniteQuery { position: 1 });
    }

    #[test]
    fn test_config_is_kept() {
        let config = SearchConfig::new()
            .with_parallel(true)
            .with_min_series_per_task(0);
        let searcher = SquaredSearcher::new(config);
        assert!(searcher.config().parallel);
        assert_eq!(searcher.config().min_series_per_task, 1);
    }

    #[test]
    fn test_manhattan_searcher_ties_where_squared_separates() {
        // q = [0,0]: L1 gives 4 for every window, squared gives 16 vs 8
        let corpus = vec![vec![4.0, 0.0, 4.0], vec![2.0, 2.0, 2.0]];
        let l1 = ManhattanSearcher::default().search(&corpus, &[0.0, 0.0]);
        assert_eq!(l1.distance, Some(4.0));
        assert_eq!(l1.len(), 4);

        let l2 = SquaredSearcher::default().find_matches(&corpus, &[0.0, 0.0]);
        assert_eq!(l2, vec![Match::new(1, 0), Match::new(1, 1)]);
    }

    #[test]
    fn test_parallel_config_matches_sequential() {
        let corpus: Vec<Vec<f64>> = (0..40)
            .map(|s| (0..12).map(|i| ((s + i) % 3) as f64).collect())
            .collect();
        let query = [0.0, 1.0];
        let sequential = SquaredSearcher::default().search(&corpus, &query);
        let parallel = SquaredSearcher::new(
            SearchConfig::new()
                .with_parallel(true)
                .with_min_series_per_task(2),
        )
        .search(&corpus, &query);
        assert_eq!(parallel, sequential);
    }
}
