use crate::core::distance_metric::DistanceMetric;

/// Squared Euclidean distance: `sum((q[x] - c[x])^2)`.
///
/// No normalization and no square root. Taking the root would not change
/// which windows are nearest, and keeping the raw sum keeps ties exact.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredEuclidean;

impl DistanceMetric for SquaredEuclidean {
    #[inline(always)]
    fn cost(query: f64, candidate: f64) -> f64 {
        let diff = query - candidate;
        diff * diff
    }
}
