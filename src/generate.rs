//! Random corpora and queries for benchmarks and tests.
//!
//! All values are drawn independently and uniformly from `[0, 1)`. Pass a
//! seeded RNG (`StdRng::seed_from_u64`) for reproducible data.

use rand::Rng;

/// A query of `len` uniform values.
pub fn random_query<R: Rng>(len: usize, rng: &mut R) -> Vec<f64> {
    (0..len).map(|_| rng.random::<f64>()).collect()
}

/// A corpus of `series` members, each of `len` uniform values.
pub fn random_corpus<R: Rng>(series: usize, len: usize, rng: &mut R) -> Vec<Vec<f64>> {
    (0..series).map(|_| random_query(len, rng)).collect()
}

/// A square `n x n` corpus: `n` members of length `n`.
pub fn square_corpus<R: Rng>(n: usize, rng: &mut R) -> Vec<Vec<f64>> {
    random_corpus(n, n, rng)
}
