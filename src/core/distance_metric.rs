/// Trait for element-wise distance metrics used in subsequence search.
///
/// Designed for static polymorphism: the search is generic over `M: DistanceMetric`,
/// so the per-element cost is monomorphized and inlined into the inner loop.
///
/// A metric is a sum of per-element costs. Each cost must be non-negative:
/// the running sum is then monotonically non-decreasing, which is what makes
/// early abandoning exact (a partial sum above the threshold can never come
/// back below it).
pub trait DistanceMetric: Clone + Send + Sync {
    /// Cost contributed by one aligned pair of query and candidate values.
    fn cost(query: f64, candidate: f64) -> f64;

    /// Full distance between `query` and an equal-length `window`, without
    /// early abandoning.
    ///
    /// Summation order matches the search's inner loop, so for any window the
    /// search accepts, this returns the bit-identical value.
    fn distance(query: &[f64], window: &[f64]) -> f64 {
        debug_assert_eq!(query.len(), window.len());
        query
            .iter()
            .zip(window)
            .fold(0.0, |acc, (&q, &c)| acc + Self::cost(q, c))
    }
}
