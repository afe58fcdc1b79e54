//! Module defining Ordered Weighted Averaging (OWA) operators.
//!
//! An OWA operator aggregates a collection of values by sorting them
//! in descending order and taking the dot product with a normalized,
//! decreasing weight vector drawn from a parametric family. With
//! decreasing weights the aggregation behaves as a soft maximum,
//! which is how the fuzzy rough approximators use it.
use std::cmp::Reverse;
use ordered_float::OrderedFloat;


/// The parametric weight families.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeightFamily {
    /// All weight on the first (largest) value: a crisp maximum.
    Strict,
    /// Uniform weights: the arithmetic mean.
    Mean,
    /// Linearly decreasing weights w_i = 2(k - i) / (k(k + 1)).
    Additive,
    /// Geometrically decreasing weights w_i = 2^-(i+1) / (1 - 2^-k).
    Exponential,
}

/// An OWA operator: a weight family together with the
/// sort-then-weighted-sum aggregation semantics.
///
/// Operators are stateless and reusable across queries; the weight
/// vector length is chosen per call site (the neighbourhood size).
#[derive(Clone, Copy, Debug)]
pub struct OWAOperator {
    family: WeightFamily,
}

impl OWAOperator {
    /// Constructs an operator from `family`.
    pub fn new(family: WeightFamily) -> OWAOperator {
        OWAOperator { family: family }
    }

    /// The strict (crisp maximum) operator.
    pub fn strict() -> OWAOperator {
        OWAOperator::new(WeightFamily::Strict)
    }

    /// The arithmetic mean operator.
    pub fn mean() -> OWAOperator {
        OWAOperator::new(WeightFamily::Mean)
    }

    /// The additive (linearly decreasing weights) operator.
    pub fn additive() -> OWAOperator {
        OWAOperator::new(WeightFamily::Additive)
    }

    /// The exponential (geometrically decreasing weights) operator.
    pub fn exponential() -> OWAOperator {
        OWAOperator::new(WeightFamily::Exponential)
    }

    /// The operator's weight family.
    pub fn family(&self) -> WeightFamily {
        self.family
    }

    /// Generates the weight vector of length `k`, normalized to sum
    /// to 1 (for `k >= 1`; `k == 0` yields an empty vector).
    pub fn weights(&self, k: usize) -> Vec<f64> {
        match self.family {
            WeightFamily::Strict => {
                let mut weights = vec![0.; k];
                if k > 0 {
                    weights[0] = 1.;
                }
                weights
            },
            WeightFamily::Mean => {
                vec![1. / k as f64; k]
            },
            WeightFamily::Additive => {
                let total = (k * (k + 1)) as f64 / 2.;
                (0..k).map(|i| (k - i) as f64 / total)
                      .collect()
            },
            WeightFamily::Exponential => {
                // 2^(k-1-i) / (2^k - 1), computed with negative powers
                // so that large k cannot overflow.
                let total = 1. - 2f64.powi(-(k as i32));
                (0..k).map(|i| 2f64.powi(-(i as i32) - 1) / total)
                      .collect()
            },
        }
    }

    /// Aggregates `vals`: sorts them in descending order and returns
    /// the weighted sum against the weight vector of equal length.
    /// An empty collection aggregates to 0.
    pub fn aggregate(&self, vals: &[f64]) -> f64 {
        let mut sorted = vals.to_vec();
        sorted.sort_by_key(|&v| Reverse(OrderedFloat(v)));

        sorted.iter()
              .zip(self.weights(sorted.len()))
              .map(|(&v, w)| v * w)
              .sum()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    /// Every family's weights are decreasing and sum to 1.
    #[test]
    fn weights_normalized() {
        for &family in &[WeightFamily::Strict, WeightFamily::Mean,
                         WeightFamily::Additive, WeightFamily::Exponential] {
            let op = OWAOperator::new(family);
            for &k in &[1usize, 2, 7, 20, 200] {
                let weights = op.weights(k);
                assert!(weights.len() == k);
                assert_relative_eq!(weights.iter().sum::<f64>(), 1.,
                                    epsilon = 1e-9);
                for pair in weights.windows(2) {
                    assert!(pair[0] >= pair[1]);
                }
            }
        }
    }

    #[test]
    fn weight_families() {
        assert!(OWAOperator::strict().weights(3) == vec![1., 0., 0.]);

        let additive = OWAOperator::additive().weights(4);
        let expected = [0.4, 0.3, 0.2, 0.1];
        for (w, e) in additive.iter().zip(expected.iter()) {
            assert_relative_eq!(*w, *e, epsilon = 1e-12);
        }

        let exponential = OWAOperator::exponential().weights(3);
        let expected = [4. / 7., 2. / 7., 1. / 7.];
        for (w, e) in exponential.iter().zip(expected.iter()) {
            assert_relative_eq!(*w, *e, epsilon = 1e-12);
        }
    }

    /// Aggregation sorts its input: order must not matter, constants
    /// aggregate to themselves, and strict weights pick the maximum.
    #[test]
    fn aggregation() {
        let op = OWAOperator::additive();
        assert_relative_eq!(op.aggregate(&[0.1, 0.9, 0.5]),
                            op.aggregate(&[0.9, 0.5, 0.1]));
        assert_relative_eq!(op.aggregate(&[0.7, 0.7, 0.7, 0.7]), 0.7,
                            epsilon = 1e-12);
        assert!(op.aggregate(&[]) == 0.);

        assert!(OWAOperator::strict().aggregate(&[0.2, 0.8, 0.4]) == 0.8);
        assert_relative_eq!(OWAOperator::mean().aggregate(&[0., 1., 0.5]), 0.5,
                            epsilon = 1e-12);
    }
}
