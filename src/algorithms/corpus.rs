use crate::algorithms::window::find_best_offsets;
use crate::core::distance_metric::DistanceMetric;
use crate::core::search_state::{SearchResult, SearchState};
use crate::error::{Result, SearchError};

/// Whether `query` can slide over members of `corpus` at all.
///
/// The common length is taken from the first member. The search space is
/// empty when the corpus is empty or the query is not strictly shorter than
/// the members.
fn has_search_space<S: AsRef<[f64]>>(corpus: &[S], query: &[f64]) -> bool {
    match corpus.first() {
        Some(first) => query.len() < first.as_ref().len(),
        None => false,
    }
}

/// Scan `corpus[start..]`, folding each member into `state`.
fn scan_into<M: DistanceMetric, S: AsRef<[f64]>>(
    state: &mut SearchState,
    corpus: &[S],
    start: usize,
    query: &[f64],
) {
    for (i, series) in corpus.iter().enumerate() {
        let series_idx = start + i;
        let window = find_best_offsets::<M>(series.as_ref(), query, state.best_distance());
        tracing::trace!(
            series = series_idx,
            distance = window.distance,
            offsets = window.offsets.len(),
            "scanned series"
        );
        state.absorb(series_idx, window);
    }
}

/// Find every window in `corpus` at the minimum distance to `query`.
///
/// Members are scanned in index order with a single running threshold: each
/// member is searched with the best distance found so far, so most windows
/// are abandoned after a few elements. When a member produces a strictly
/// better distance, matches from earlier members are discarded; when it ties,
/// its matches are appended.
///
/// # Arguments
/// * `corpus` - Sequences of a common length `n` (taken from `corpus[0]`)
/// * `query` - The query of length `k`
///
/// # Returns
/// Matches ordered by series, then offset. Empty when the corpus is empty or
/// `k >= n`. Members shorter than the query contribute no windows; uniform
/// length is the caller's responsibility (see [`validate`]).
pub fn search<M: DistanceMetric, S: AsRef<[f64]>>(corpus: &[S], query: &[f64]) -> SearchResult {
    if !has_search_space(corpus, query) {
        return SearchResult::empty();
    }

    let mut state = SearchState::new();
    scan_into::<M, S>(&mut state, corpus, 0, query);

    tracing::debug!(
        series = corpus.len(),
        query_len = query.len(),
        matches = state.matches().len(),
        best = state.best_distance(),
        "corpus search complete"
    );
    state.into_result()
}

/// Parallel corpus search.
///
/// Splits the corpus into contiguous chunks of at least `min_series_per_task`
/// members, searches each chunk with its own [`SearchState`], then merges the
/// chunk states in index order. Every accepted distance is a complete sum
/// whose value does not depend on the threshold it was compared against, so
/// the result is identical to [`search`].
#[cfg(feature = "parallel")]
pub fn search_parallel<M: DistanceMetric, S: AsRef<[f64]> + Sync>(
    corpus: &[S],
    query: &[f64],
    min_series_per_task: usize,
) -> SearchResult {
    use rayon::prelude::*;

    if !has_search_space(corpus, query) {
        return SearchResult::empty();
    }

    let n_threads = rayon::current_num_threads();
    let chunk_size = corpus
        .len()
        .div_ceil(n_threads)
        .max(min_series_per_task)
        .max(1);

    if chunk_size >= corpus.len() {
        return search::<M, S>(corpus, query);
    }

    let states: Vec<SearchState> = corpus
        .par_chunks(chunk_size)
        .enumerate()
        .map(|(chunk_idx, chunk)| {
            let mut state = SearchState::new();
            scan_into::<M, S>(&mut state, chunk, chunk_idx * chunk_size, query);
            state
        })
        .collect();

    let mut combined = SearchState::new();
    for state in states {
        combined.merge(state);
    }

    tracing::debug!(
        series = corpus.len(),
        chunk_size,
        matches = combined.matches().len(),
        best = combined.best_distance(),
        "parallel corpus search complete"
    );
    combined.into_result()
}

/// Check the corpus and query preconditions of [`search`].
///
/// # Errors
/// - [`SearchError::RaggedCorpus`] if a member's length differs from `corpus[0]`
/// - [`SearchError::NonFinite`] if a corpus value is NaN or infinite
/// - [`SearchError::NonFiniteQuery`] if a query value is NaN or infinite
pub fn validate<S: AsRef<[f64]>>(corpus: &[S], query: &[f64]) -> Result<()> {
    if let Some(position) = query.iter().position(|v| !v.is_finite()) {
        return Err(SearchError::NonFiniteQuery { position });
    }

    let expected = corpus.first().map_or(0, |s| s.as_ref().len());
    for (index, series) in corpus.iter().enumerate() {
        let series = series.as_ref();
        if series.len() != expected {
            return Err(SearchError::RaggedCorpus {
                index,
                expected,
                found: series.len(),
            });
        }
        if let Some(position) = series.iter().position(|v| !v.is_finite()) {
            return Err(SearchError::NonFinite {
                series: index,
                position,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::search_state::Match;
    use crate::metrics::manhattan::Manhattan;
    use crate::metrics::squared::SquaredEuclidean;

    fn run(corpus: &[Vec<f64>], query: &[f64]) -> SearchResult {
        search::<SquaredEuclidean, _>(corpus, query)
    }

    #[test]
    fn test_all_zero_series() {
        let result = run(&[vec![0.0; 5]], &[0.0, 0.0]);
        assert_eq!(result.distance, Some(0.0));
        assert_eq!(
            result.matches,
            (0..4).map(|o| Match::new(0, o)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_single_exact_match() {
        let corpus = vec![vec![1.0, 2.0, 3.0, 4.0], vec![4.0, 3.0, 2.0, 1.0]];
        let result = run(&corpus, &[3.0, 4.0]);
        assert_eq!(result.matches, vec![Match::new(0, 2)]);
        assert_eq!(result.distance, Some(0.0));
    }

    #[test]
    fn test_query_as_long_as_series_is_empty() {
        let corpus = vec![vec![1.0, 1.0], vec![2.0, 2.0]];
        let result = run(&corpus, &[1.0, 1.0]);
        assert!(result.is_empty());
        assert_eq!(result.distance, None);
    }

    #[test]
    fn test_query_longer_than_series_is_empty() {
        let corpus = vec![vec![1.0, 1.0]];
        assert!(run(&corpus, &[1.0, 1.0, 1.0]).is_empty());
    }

    #[test]
    fn test_empty_corpus() {
        let corpus: Vec<Vec<f64>> = Vec::new();
        assert!(run(&corpus, &[1.0]).is_empty());
    }

    #[test]
    fn test_later_strictly_better_series_discards_earlier_matches() {
        // Series 0 ties at distance 1 twice, series 1 has two exact matches.
        let corpus = vec![vec![1.0, 2.0, 1.0], vec![9.0, 0.0, 0.0]];
        let result = run(&corpus, &[0.0]);
        assert_eq!(result.distance, Some(0.0));
        assert_eq!(result.matches, vec![Match::new(1, 1), Match::new(1, 2)]);
    }

    #[test]
    fn test_ties_across_series_are_all_kept() {
        let corpus = vec![
            vec![5.0, 1.0, 5.0],
            vec![5.0, 5.0, 5.0],
            vec![1.0, 5.0, 1.0],
        ];
        let result = run(&corpus, &[1.0]);
        assert_eq!(
            result.matches,
            vec![Match::new(0, 1), Match::new(2, 0), Match::new(2, 2)]
        );
    }

    #[test]
    fn test_losing_series_between_ties() {
        // Series 1 is worse everywhere and must not disturb the tie set.
        let corpus = vec![vec![0.5, 3.0], vec![7.0, 8.0], vec![3.0, 0.5]];
        let result = run(&corpus, &[0.0]);
        assert_eq!(result.distance, Some(0.25));
        assert_eq!(result.matches, vec![Match::new(0, 0), Match::new(2, 1)]);
    }

    #[test]
    fn test_state_does_not_leak_between_calls() {
        // A first search settles at distance 0; a second search over data
        // whose best is large must still find it.
        let first = run(&[vec![1.0, 2.0, 3.0]], &[2.0]);
        assert_eq!(first.distance, Some(0.0));

        let second = run(&[vec![10.0, 20.0, 30.0]], &[0.0]);
        assert_eq!(second.distance, Some(100.0));
        assert_eq!(second.matches, vec![Match::new(0, 0)]);
    }

    #[test]
    fn test_short_member_contributes_nothing() {
        // Ragged input is not validated by `search`, but must not panic.
        let corpus = vec![vec![1.0, 2.0, 3.0], vec![2.0], vec![0.0, 2.0, 9.0]];
        let result = run(&corpus, &[2.0, 3.0]);
        assert_eq!(result.matches, vec![Match::new(0, 1)]);
    }

    #[test]
    fn test_manhattan_metric() {
        // q = [0,0]: series 0 windows -> |4|+0 = 4, 0+|4| = 4; series 1 -> 2+2 = 4, 2+2 = 4
        let corpus = vec![vec![4.0, 0.0, 4.0], vec![2.0, 2.0, 2.0]];
        let l1 = search::<Manhattan, _>(&corpus, &[0.0, 0.0]);
        assert_eq!(l1.distance, Some(4.0));
        assert_eq!(l1.len(), 4);

        // Squared distance separates them: 16 vs 8
        let l2 = search::<SquaredEuclidean, _>(&corpus, &[0.0, 0.0]);
        assert_eq!(l2.distance, Some(8.0));
        assert_eq!(l2.matches, vec![Match::new(1, 0), Match::new(1, 1)]);
    }

    #[test]
    fn test_accepts_slices_of_slices() {
        let a = [1.0, 2.0, 3.0];
        let b = [3.0, 2.0, 1.0];
        let corpus: Vec<&[f64]> = vec![&a, &b];
        let result = search::<SquaredEuclidean, _>(&corpus, &[3.0]);
        assert_eq!(result.matches, vec![Match::new(0, 2), Match::new(1, 0)]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        // Quantized values produce many exact ties across series.
        let corpus: Vec<Vec<f64>> = (0..97)
            .map(|s| {
                (0..40)
                    .map(|i| (((s * 31 + i * 17) % 7) as f64) * 0.5)
                    .collect()
            })
            .collect();
        let query = [1.0, 1.5, 0.5];

        let sequential = run(&corpus, &query);
        for min_chunk in [1, 3, 16, 200] {
            let parallel = search_parallel::<SquaredEuclidean, _>(&corpus, &query, min_chunk);
            assert_eq!(parallel, sequential, "min_series_per_task={min_chunk}");
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_degenerate_query_is_empty() {
        let corpus = vec![vec![1.0, 1.0]; 10];
        assert!(search_parallel::<SquaredEuclidean, _>(&corpus, &[1.0, 1.0], 1).is_empty());
    }

    #[test]
    fn test_validate_ok() {
        let corpus = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert!(validate(&corpus, &[1.0]).is_ok());
    }

    #[test]
    fn test_validate_ragged() {
        let corpus = vec![vec![1.0, 2.0], vec![3.0]];
        match validate(&corpus, &[1.0]) {
            Err(SearchError::RaggedCorpus {
                index,
                expected,
                found,
            }) => {
                assert_eq!((index, expected, found), (1, 2, 1));
            }
            other => panic!("Expected RaggedCorpus, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_non_finite() {
        let corpus = vec![vec![1.0, 2.0], vec![3.0, f64::NAN]];
        assert!(matches!(
            validate(&corpus, &[1.0]),
            Err(SearchError::NonFinite {
                series: 1,
                position: 1
            })
        ));
        assert!(matches!(
            validate(&[vec![1.0, 2.0]], &[f64::INFINITY]),
            Err(SearchError::NonFiniteQuery { position: 0 })
        ));
    }
}
