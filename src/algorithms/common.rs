use crate::core::distance_metric::DistanceMetric;

/// Number of windows of length `m` in a sequence of length `n`.
///
/// Zero when the sequence is shorter than the window.
#[inline]
pub fn window_count(n: usize, m: usize) -> usize {
    if n < m {
        0
    } else {
        n - m + 1
    }
}

/// Accumulate the distance between `query` and `window`, stopping as soon as
/// the running sum exceeds `threshold`.
///
/// The return value is either the complete distance (when it never exceeded
/// `threshold`) or a partial sum strictly greater than `threshold`. Callers
/// can therefore run their accept/reject comparison on it directly: any value
/// `<= threshold` is a complete distance.
#[inline]
pub fn early_abandoned_distance<M: DistanceMetric>(
    query: &[f64],
    window: &[f64],
    threshold: f64,
) -> f64 {
    debug_assert_eq!(query.len(), window.len());
    let mut d = 0.0;
    for (&q, &c) in query.iter().zip(window) {
        if d > threshold {
            break;
        }
        d += M::cost(q, c);
    }
    d
}

/// Distance from `query` to every window of `candidate`, without abandoning.
///
/// Reference implementation used to check the early-abandoned search.
pub fn distance_profile<M: DistanceMetric>(query: &[f64], candidate: &[f64]) -> Vec<f64> {
    let m = query.len();
    (0..window_count(candidate.len(), m))
        .map(|i| M::distance(query, &candidate[i..i + m]))
        .collect()
}
