//! Fuzzy Rough OVO COmbination (FROVOCO) classification.
use ndarray::prelude::*;
use rusty_machine::learning::LearningResult;

use approximation::{Approximation, ComplementedDistance};
use ensemble::{Classifier, ClassifierModel, canonical_classes, split_by_class};
use nn::{Index, K, LinearScan, NNSearch};
use owa::{OWAOperator, WeightFamily};


/// Imbalance ratio above which a class is considered heavily
/// outnumbering, switching its weighting regime from exponential to
/// additive.
const IMBALANCE_THRESHOLD: f64 = 9.;

/// Fuzzy Rough OVO COmbination (FROVOCO) classification.
///
/// An imbalance-aware ensemble: every class is approximated both with
/// additive OWA weights over 10% of the class size and with
/// exponential OWA weights over the full class size, and the
/// imbalance ratios between classes decide, pair by pair, which
/// regime speaks. Scores combine a one-vs-one weighted vote, a
/// membership blend of the same-class and complement-class
/// approximations, and a penalty for deviating from the class
/// signatures computed on the training data.
///
/// Scores are a relative ranking, not calibrated probabilities: they
/// are not guaranteed to lie in [0,1].
///
/// # Examples
///
/// ```
/// #[macro_use(array)]
/// extern crate ndarray;
/// extern crate fuzzy_rough;
///
/// # fn main() {
/// use fuzzy_rough::ensemble::*;
///
/// let frovoco = FROVOCO::default();
/// let train_inputs = array![[0., 0.],
///                           [0.2, 0.],
///                           [0., 0.2],
///                           [5., 5.],
///                           [5., 5.2]];
/// let train_targets = array![0, 0, 0, 1, 1];
///
/// let model = frovoco.construct(&train_inputs.view(), &train_targets.view())
///                    .expect("Failed to construct model");
/// let scores = model.query(&array![[0.1, 0.]].view());
/// assert!(scores[[0, 0]] > scores[[0, 1]]);
/// # }
/// ```
pub struct FROVOCO<S: NNSearch> {
    additive: ComplementedDistance,
    exponential: ComplementedDistance,
    nn_search: S,
}

impl FROVOCO<LinearScan> {
    /// Constructs a FROVOCO classifier over a linear scan neighbour
    /// search.
    pub fn new() -> FROVOCO<LinearScan> {
        FROVOCO::with_search(LinearScan::new())
    }
}

impl Default for FROVOCO<LinearScan> {
    fn default() -> FROVOCO<LinearScan> {
        FROVOCO::new()
    }
}

impl<S: NNSearch> FROVOCO<S> {
    /// Constructs a FROVOCO classifier with the given neighbour
    /// search.
    pub fn with_search(nn_search: S) -> FROVOCO<S> {
        FROVOCO {
            additive: ComplementedDistance::new(OWAOperator::additive(),
                                                K::Fraction(0.1)),
            exponential: ComplementedDistance::new(OWAOperator::exponential(),
                                                   K::All),
            nn_search: nn_search,
        }
    }
}

impl<S: NNSearch> Classifier for FROVOCO<S> {
    type Model = FROVOCOModel<S::Index>;

    fn construct(&self, inputs: &ArrayView2<f64>,
                 targets: &ArrayView1<usize>)
                 -> LearningResult<FROVOCOModel<S::Index>> {
        let classes = canonical_classes(inputs, targets)?;
        let n_classes = classes.len();

        // Rescale every attribute by its range times the attribute
        // count, so that the Manhattan distance between any two
        // in-range instances is at most 1. A constant attribute has
        // range 0 and NaN-propagates, as malformed numeric input
        // does throughout.
        let scale = attribute_scale(inputs);
        let rescaled = rescale(inputs, &scale);
        let (same, complement) = split_by_class(&rescaled.view(), targets,
                                                &classes);

        let class_sizes = same.iter()
                              .map(|c| c.rows())
                              .collect::<Vec<_>>();
        let n = inputs.rows();

        let mut ovo_ir = Array2::<f64>::zeros((n_classes, n_classes));
        for i in 0..n_classes {
            for j in 0..n_classes {
                ovo_ir[[i, j]] = class_sizes[i] as f64 / class_sizes[j] as f64;
            }
        }
        let ova_ir = class_sizes.iter()
                                .map(|&c_n| c_n as f64 / (n - c_n) as f64)
                                .collect::<Vec<_>>();

        // The regime governing each class's own approximation is
        // frozen here and reused verbatim at query time.
        let regimes = ova_ir.iter()
                            .map(|&ir| if ir > IMBALANCE_THRESHOLD {
                                WeightFamily::Additive
                            } else {
                                WeightFamily::Exponential
                            })
                            .collect::<Vec<_>>();

        let add_approx = same.iter()
                             .map(|c| self.additive
                                          .construct(self.nn_search
                                                         .construct(c.clone())))
                             .collect::<Vec<_>>();
        let exp_approx = same.iter()
                             .map(|c| self.exponential
                                          .construct(self.nn_search
                                                         .construct(c.clone())))
                             .collect::<Vec<_>>();
        let co_approx = complement.into_iter()
                                  .zip(&ova_ir)
                                  .map(|(co, &ir)| {
                                      let approximator = if 1. / ir > IMBALANCE_THRESHOLD {
                                          &self.additive
                                      } else {
                                          &self.exponential
                                      };
                                      approximator.construct(self.nn_search
                                                                 .construct(co))
                                  })
                                  .collect::<Vec<_>>();

        // Class signatures: the mean membership blend of each class's
        // training instances, frozen at construction and used at
        // query time only to measure deviation.
        let mut sig = Array2::<f64>::zeros((n_classes, n_classes));
        for (i, c) in same.iter().enumerate() {
            let c_view = c.view();
            for j in 0..n_classes {
                let own = match regimes[j] {
                    WeightFamily::Additive => &add_approx[j],
                    _ => &exp_approx[j],
                };
                let own_mean = mean(&own.query(&c_view));
                let co_mean = mean(&co_approx[j].query(&c_view));
                sig[[i, j]] = (own_mean + 1. - co_mean) / 2.;
            }
        }

        Ok(FROVOCOModel {
            classes: classes,
            scale: scale,
            ovo_ir: ovo_ir,
            ova_ir: ova_ir,
            regimes: regimes,
            add_approx: add_approx,
            exp_approx: exp_approx,
            co_approx: co_approx,
            sig: sig,
        })
    }
}

/// A constructed FROVOCO model. All ratios, regimes, approximations
/// and signatures are frozen at construction; queries never mutate
/// the model.
pub struct FROVOCOModel<I: Index> {
    classes: Vec<usize>,
    scale: Array1<f64>,
    ovo_ir: Array2<f64>,
    ova_ir: Vec<f64>,
    regimes: Vec<WeightFamily>,
    add_approx: Vec<Approximation<I>>,
    exp_approx: Vec<Approximation<I>>,
    co_approx: Vec<Approximation<I>>,
    sig: Array2<f64>,
}

impl<I: Index> FROVOCOModel<I> {
    /// The membership blend of pre-queried approximation values:
    /// `(own + 1 - co) / 2`, with the own-class values drawn from the
    /// regime frozen for each class.
    fn membership(&self, add_vals: &[Array1<f64>], exp_vals: &[Array1<f64>],
                  co_vals: &[Array1<f64>], n_probes: usize) -> Array2<f64> {
        let n_classes = self.classes.len();
        let mut mem = Array2::<f64>::zeros((n_probes, n_classes));

        for j in 0..n_classes {
            let own = match self.regimes[j] {
                WeightFamily::Additive => &add_vals[j],
                _ => &exp_vals[j],
            };
            for i in 0..n_probes {
                mem[[i, j]] = (own[i] + 1. - co_vals[j][i]) / 2.;
            }
        }

        mem
    }

    /// The one-vs-one weighted vote: for each ordered class pair
    /// (i, j), class i earns `v_ij / (v_ij + v_ji)`, where `v_ij` is
    /// the approximation value of class i under the regime selected
    /// by the (i, j) imbalance ratio. When both compared quantities
    /// are 0 the vote falls back to 0.5 instead of dividing by zero.
    fn weighted_vote(&self, add_vals: &[Array1<f64>],
                     exp_vals: &[Array1<f64>], n_probes: usize)
                     -> Array2<f64> {
        let n_classes = self.classes.len();
        let mut wv = Array2::<f64>::zeros((n_probes, n_classes));

        for i in 0..n_classes {
            for j in 0..n_classes {
                for p in 0..n_probes {
                    let v_ij = if self.ovo_ir[[i, j]] > IMBALANCE_THRESHOLD {
                        add_vals[i][p]
                    } else {
                        exp_vals[i][p]
                    };
                    let v_ji = if self.ovo_ir[[j, i]] > IMBALANCE_THRESHOLD {
                        add_vals[j][p]
                    } else {
                        exp_vals[j][p]
                    };

                    let total = v_ij + v_ji;
                    wv[[p, i]] += if total == 0. {
                        0.5
                    } else {
                        v_ij / total
                    };
                }
            }
        }

        wv
    }
}

impl<I: Index> ClassifierModel for FROVOCOModel<I> {
    fn classes(&self) -> &[usize] {
        &self.classes
    }

    fn query(&self, inputs: &ArrayView2<f64>) -> Array2<f64> {
        let n_classes = self.classes.len();
        let n_probes = inputs.rows();
        let mut scores = Array2::<f64>::zeros((n_probes, n_classes));

        if n_probes == 0 {
            return scores;
        }

        let rescaled = rescale(inputs, &self.scale);
        let rescaled = rescaled.view();

        let add_vals = self.add_approx
                           .iter()
                           .map(|a| a.query(&rescaled))
                           .collect::<Vec<_>>();
        let exp_vals = self.exp_approx
                           .iter()
                           .map(|a| a.query(&rescaled))
                           .collect::<Vec<_>>();
        let co_vals = self.co_approx
                          .iter()
                          .map(|a| a.query(&rescaled))
                          .collect::<Vec<_>>();

        let mem = self.membership(&add_vals, &exp_vals, &co_vals, n_probes);
        let wv = self.weighted_vote(&add_vals, &exp_vals, n_probes);

        // Final score: the averaged vote and membership, minus the
        // mean squared deviation from the class signature.
        for p in 0..n_probes {
            for i in 0..n_classes {
                let mse = (0..n_classes)
                              .map(|j| (mem[[p, j]] - self.sig[[i, j]]).powi(2))
                              .sum::<f64>() / n_classes as f64;

                scores[[p, i]] = (wv[[p, i]] + mem[[p, i]]) / 2.
                                 - mse / n_classes as f64;
            }
        }

        scores
    }
}

/// Per-attribute scale: the attribute's range over the training data
/// times the number of attributes.
fn attribute_scale(inputs: &ArrayView2<f64>) -> Array1<f64> {
    let d = inputs.cols();
    let mut scale = Array1::<f64>::zeros(d);

    for j in 0..d {
        let column = inputs.column(j);
        let max = column.iter().cloned().fold(::std::f64::NEG_INFINITY, f64::max);
        let min = column.iter().cloned().fold(::std::f64::INFINITY, f64::min);
        scale[j] = (max - min) * d as f64;
    }

    scale
}

fn rescale(inputs: &ArrayView2<f64>, scale: &Array1<f64>) -> Array2<f64> {
    let mut rescaled = inputs.to_owned();
    for mut row in rescaled.outer_iter_mut() {
        for (v, s) in row.iter_mut().zip(scale.iter()) {
            *v /= *s;
        }
    }
    rescaled
}

fn mean(vals: &Array1<f64>) -> f64 {
    vals.iter().sum::<f64>() / vals.len() as f64
}
