//! Module defining nearest neighbour searches.
//!
//! An `NNSearch` constructs an `Index` owning a snapshot of a set of
//! feature vectors; the index answers k nearest neighbour queries for
//! batches of probe vectors. The searches are the substrate of the
//! fuzzy rough approximators, which only ever consume the returned
//! distances.
pub mod linear;

use std::cmp::min;
use ndarray::prelude::*;

pub use self::linear::{LinearScan, manhattan_distance, euclidean_distance};


/// A neighbourhood size: either a literal number of neighbours, or a
/// function of the index size.
#[derive(Clone, Copy, Debug)]
pub enum K {
    /// Exactly this many neighbours (clamped to the index size).
    Fixed(usize),
    /// This fraction of the index size, rounded up, at least 1.
    Fraction(f64),
    /// As many neighbours as the index holds.
    All,
}

impl K {
    /// Resolves the neighbourhood size against an index of `n`
    /// construction instances.
    pub fn resolve(&self, n: usize) -> usize {
        match *self {
            K::Fixed(k) => min(k, n),
            K::Fraction(f) => min(((f * n as f64).ceil() as usize).max(1), n),
            K::All => n,
        }
    }
}

/// A nearest neighbour search algorithm, used to construct a
/// queryable index from construction instances.
pub trait NNSearch {
    /// The type of the constructed index.
    type Index: Index;

    /// Constructs the index based on the data `x` (one row per
    /// instance). The index owns its snapshot of the data and is
    /// never mutated afterwards.
    fn construct(&self, x: Array2<f64>) -> Self::Index;
}

/// A constructed, immutable nearest neighbour index.
///
/// Implementors supply the raw k nearest neighbour search; the
/// self-query logic is implemented once on top of it. `query` must be
/// safe to call from concurrent readers, as constructed classifier
/// models share indices across concurrent queries.
pub trait Index {
    /// Number of construction instances held by the index.
    fn len(&self) -> usize;

    /// A view of the construction instances.
    fn data(&self) -> ArrayView2<f64>;

    /// Identifies the `k` nearest neighbours for each of the rows of
    /// `x`.
    ///
    /// Returns a pair of `(x.rows(), k)` matrices: the indices of the
    /// nearest neighbours among the construction instances, and the
    /// corresponding distances, both in ascending order of distance.
    fn query(&self, x: &ArrayView2<f64>, k: usize)
             -> (Array2<usize>, Array2<f64>);

    /// Identifies the `k` nearest neighbours of each construction
    /// instance among the other construction instances, excluding the
    /// instance itself.
    fn query_self(&self, k: usize) -> (Array2<usize>, Array2<f64>) {
        let k = min(k, self.len().saturating_sub(1));
        let data = self.data();
        let (neighbours, distances) = self.query(&data, k + 1);

        // Drop each row's first hit, which is the instance itself.
        let n = neighbours.rows();
        let mut own_neighbours = Array2::<usize>::zeros((n, k));
        let mut own_distances = Array2::<f64>::zeros((n, k));
        for i in 0..n {
            for j in 0..k {
                own_neighbours[[i, j]] = neighbours[[i, j + 1]];
                own_distances[[i, j]] = distances[[i, j + 1]];
            }
        }

        (own_neighbours, own_distances)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbourhood_size() {
        assert!(K::Fixed(5).resolve(20) == 5);
        assert!(K::Fixed(20).resolve(5) == 5);
        assert!(K::Fraction(0.1).resolve(100) == 10);
        assert!(K::Fraction(0.1).resolve(5) == 1);
        assert!(K::Fraction(0.25).resolve(10) == 3);
        assert!(K::All.resolve(7) == 7);
    }
}
