//! Module defining fuzzy rough approximators.
//!
//! An approximator turns a nearest neighbour index into a fuzzy rough
//! approximation of the indexed set: each probe vector receives a
//! single degree in [0,1] expressing how strongly its neighbourhood
//! supports membership of the set. The ensemble classifiers compose
//! such approximations over per-class indices.
use ndarray::prelude::*;

use nn::{Index, K};
use owa::OWAOperator;


/// The complemented distance approximator.
///
/// Given an index, resolves the neighbourhood size, queries the k
/// nearest neighbour distances of every probe, complements each
/// distance into a similarity `1 - d` clamped to [0,1], and
/// aggregates the similarities with the OWA operator. Distances
/// should be normalized so that 1 means "entirely dissimilar";
/// callers rescale their features accordingly (see FROVOCO).
#[derive(Clone, Copy, Debug)]
pub struct ComplementedDistance {
    owa: OWAOperator,
    k: K,
}

impl ComplementedDistance {
    /// Constructs an approximator from an OWA operator and a
    /// neighbourhood size.
    pub fn new(owa: OWAOperator, k: K) -> ComplementedDistance {
        ComplementedDistance {
            owa: owa,
            k: k,
        }
    }

    /// Constructs the approximation of the set held by `index`. The
    /// neighbourhood size is resolved against the index size once and
    /// frozen, together with the weight vector.
    pub fn construct<I: Index>(&self, index: I) -> Approximation<I> {
        let k = self.k.resolve(index.len());
        let weights = self.owa.weights(k);

        Approximation {
            index: index,
            k: k,
            weights: weights,
        }
    }
}

/// A constructed fuzzy rough approximation: an owned neighbour index
/// plus a frozen neighbourhood size and weight vector. Read-only
/// after construction; queries are safe to run concurrently provided
/// the index supports concurrent reads.
pub struct Approximation<I: Index> {
    index: I,
    k: usize,
    weights: Vec<f64>,
}

impl<I: Index> Approximation<I> {
    /// Returns the approximation degree of every row of `x`: the
    /// OWA weighted sum of the complemented nearest neighbour
    /// distances, in descending order of similarity.
    pub fn query(&self, x: &ArrayView2<f64>) -> Array1<f64> {
        let (_, distances) = self.index.query(x, self.k);

        let vals = distances.outer_iter()
                            .map(|row| {
                                // Distances arrive ascending, so the
                                // similarities are already descending.
                                row.iter()
                                   .map(|&d| (1. - d).max(0.).min(1.))
                                   .zip(self.weights.iter())
                                   .map(|(s, &w)| s * w)
                                   .sum()
                            })
                            .collect::<Vec<f64>>();

        Array::from_vec(vals)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use nn::{NNSearch, LinearScan};

    #[test]
    fn exact_match_is_fully_possible() {
        let data = array![[0., 0.],
                          [0.2, 0.],
                          [0., 0.2]];
        let index = LinearScan::new().construct(data);

        let approximator = ComplementedDistance::new(OWAOperator::strict(),
                                                     K::Fixed(1));
        let approximation = approximator.construct(index);

        let probes = array![[0., 0.],
                            [1., 1.]];
        let vals = approximation.query(&probes.view());

        // A probe sitting on an indexed instance is fully possible; a
        // probe at distance >= 1 from everything is fully excluded.
        assert!(vals == array![1., 0.]);
    }

    #[test]
    fn owa_weighted_neighbourhood() {
        let data = array![[0., 0.],
                          [0.5, 0.]];
        let index = LinearScan::new().construct(data);

        let approximator = ComplementedDistance::new(OWAOperator::additive(),
                                                     K::All);
        let approximation = approximator.construct(index);

        let probes = array![[0., 0.]];
        let vals = approximation.query(&probes.view());

        // Similarities 1 and 0.5 under additive weights [2/3, 1/3].
        assert_relative_eq!(vals[0], 2. / 3. + 0.5 / 3., epsilon = 1e-12);
    }
}
