use crate::algorithms::common::{early_abandoned_distance, window_count};
use crate::core::distance_metric::DistanceMetric;
use crate::core::search_state::WindowMatch;

/// Find the window start(s) in `candidate` closest to `query`.
///
/// Scans offsets `0..=n-k` in ascending order. For each offset the distance is
/// accumulated with early abandoning against the best distance known at that
/// point, which starts at `best_so_far` and tightens whenever a strictly
/// better window is found. Windows equal to the current best are kept as ties.
///
/// # Arguments
/// * `candidate` - The sequence to scan (length `n`)
/// * `query` - The query (length `k`)
/// * `best_so_far` - Caller's best distance, `f64::INFINITY` if none yet
///
/// # Returns
/// The tightened best distance and the offsets achieving it. When no window
/// beats or ties `best_so_far`, the distance is `best_so_far` and the offsets
/// are empty. A candidate shorter than the query has no windows.
pub fn find_best_offsets<M: DistanceMetric>(
    candidate: &[f64],
    query: &[f64],
    best_so_far: f64,
) -> WindowMatch {
    let k = query.len();
    let mut best = best_so_far;
    let mut offsets = Vec::new();

    for i in 0..window_count(candidate.len(), k) {
        let d = early_abandoned_distance::<M>(query, &candidate[i..i + k], best);

        // Only complete sums can satisfy this: an abandoned sum exceeds `best`.
        if d <= best {
            if d < best {
                best = d;
                offsets.clear();
            }
            offsets.push(i);
        }
    }

    WindowMatch {
        distance: best,
        offsets,
    }
}
