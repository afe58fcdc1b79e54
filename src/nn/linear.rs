//! Brute force linear scan nearest neighbour search.
use std::cmp::min;
use lazysort::SortedPartial;
use ndarray::prelude::*;

use nn::{NNSearch, Index};


/// Returns the Manhattan distance between two vectors of f64 values.
pub fn manhattan_distance(v1: &ArrayView1<f64>, v2: &ArrayView1<f64>) -> f64 {
    v1.iter()
      .zip(v2.iter())
      .map(|(x, y)| (x - y).abs())
      .sum()
}

/// Returns the Euclidean distance between two vectors of f64 values.
pub fn euclidean_distance(v1: &ArrayView1<f64>, v2: &ArrayView1<f64>) -> f64 {
    v1.iter()
      .zip(v2.iter())
      .map(|(x, y)| (x - y).powi(2))
      .sum::<f64>()
      .sqrt()
}

/// Nearest neighbour search by exhaustive scan.
///
/// The search is defined for some distance metric; every query
/// compares the probe against all construction instances. Slower than
/// a space partitioning tree on large indices, but exact, dependency
/// free, and fast enough for the per-class sub-matrices the ensemble
/// classifiers construct.
pub struct LinearScan {
    distance: fn(&ArrayView1<f64>, &ArrayView1<f64>) -> f64,
}

impl LinearScan {
    /// Constructs a linear scan search with the Manhattan metric.
    pub fn new() -> LinearScan {
        LinearScan {
            distance: manhattan_distance,
        }
    }

    /// Constructs a linear scan search with a custom metric.
    pub fn with_distance(distance: fn(&ArrayView1<f64>, &ArrayView1<f64>) -> f64)
                         -> LinearScan {
        LinearScan {
            distance: distance,
        }
    }
}

impl Default for LinearScan {
    fn default() -> LinearScan {
        LinearScan::new()
    }
}

impl NNSearch for LinearScan {
    type Index = LinearScanIndex;

    fn construct(&self, x: Array2<f64>) -> LinearScanIndex {
        LinearScanIndex {
            x: x,
            distance: self.distance,
        }
    }
}

/// The index constructed by `LinearScan`: a snapshot of the
/// construction instances plus the metric.
pub struct LinearScanIndex {
    x: Array2<f64>,
    distance: fn(&ArrayView1<f64>, &ArrayView1<f64>) -> f64,
}

impl Index for LinearScanIndex {
    fn len(&self) -> usize {
        self.x.rows()
    }

    fn data(&self) -> ArrayView2<f64> {
        self.x.view()
    }

    fn query(&self, x: &ArrayView2<f64>, k: usize)
             -> (Array2<usize>, Array2<f64>) {
        let k = min(k, self.len());

        let mut neighbours = Array2::<usize>::zeros((x.rows(), k));
        let mut distances = Array2::<f64>::zeros((x.rows(), k));

        for (i, probe) in x.outer_iter().enumerate() {
            let nearest = self.x
                              .outer_iter()
                              .enumerate()
                              .map(|(j, row)| ((self.distance)(&row, &probe), j))
                              .sorted_partial_last()
                              .take(k);

            for (rank, (d, j)) in nearest.enumerate() {
                neighbours[[i, rank]] = j;
                distances[[i, rank]] = d;
            }
        }

        (neighbours, distances)
    }
}
