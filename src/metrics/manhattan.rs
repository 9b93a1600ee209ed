use crate::core::distance_metric::DistanceMetric;

/// Manhattan (L1) distance: `sum(|q[x] - c[x]|)`.
///
/// Less sensitive to a single large deviation than [`SquaredEuclidean`],
/// so a window that is close everywhere except for one spike can still win.
///
/// [`SquaredEuclidean`]: crate::metrics::squared::SquaredEuclidean
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl DistanceMetric for Manhattan {
    #[inline(always)]
    fn cost(query: f64, candidate: f64) -> f64 {
        (query - candidate).abs()
    }
}
