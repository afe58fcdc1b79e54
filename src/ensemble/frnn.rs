//! Fuzzy Rough Nearest Neighbour (FRNN) classification.
use ndarray::prelude::*;
use rusty_machine::learning::LearningResult;
use rusty_machine::learning::error::{Error, ErrorKind};

use approximation::{Approximation, ComplementedDistance};
use ensemble::{Classifier, ClassifierModel, canonical_classes, split_by_class};
use nn::{Index, K, LinearScan, NNSearch};
use owa::OWAOperator;


/// Fuzzy Rough Nearest Neighbour (FRNN) classification.
///
/// Builds, per class, an upper approximation over the same-class
/// instances and a lower approximation over the complement-class
/// instances (used as `1 - approximation`), and scores a probe with
/// the mean of the two. Either approximator may be disabled, in which
/// case the remaining one is used alone.
///
/// With strict OWA weights this is classic FRNN classification; with
/// the default additive weights it is its OWA extension, which is
/// considerably more robust to noise.
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
/// let frnn = FRNN::default();
/// let train_inputs = array![[0., 0.],
///                           [0.2, 0.],
///                           [5., 5.],
///                           [5., 5.2]];
/// let train_targets = array![0, 0, 1, 1];
///
/// let model = frnn.construct(&train_inputs.view(), &train_targets.view())
///                 .expect("Failed to construct model");
/// let scores = model.query(&array![[0.1, 0.]].view());
/// assert!(scores[[0, 0]] > scores[[0, 1]]);
/// # }
/// ```
pub struct FRNN<S: NNSearch> {
    upper: Option<ComplementedDistance>,
    lower: Option<ComplementedDistance>,
    nn_search: S,
}

impl FRNN<LinearScan> {
    /// Constructs an FRNN classifier with the default parameters:
    /// additive OWA weights over 20 neighbours for both
    /// approximators, and a linear scan neighbour search.
    pub fn new() -> FRNN<LinearScan> {
        FRNN::with_search(LinearScan::new())
    }
}

impl Default for FRNN<LinearScan> {
    fn default() -> FRNN<LinearScan> {
        FRNN::new()
    }
}

impl<S: NNSearch> FRNN<S> {
    /// Constructs an FRNN classifier with the default approximators
    /// and the given neighbour search.
    pub fn with_search(nn_search: S) -> FRNN<S> {
        let approximator = ComplementedDistance::new(OWAOperator::additive(),
                                                     K::Fixed(20));
        FRNN::with_approximators(Some(approximator), Some(approximator),
                                 nn_search)
    }

    /// Constructs an FRNN classifier from explicit upper and lower
    /// approximators. A disabled (`None`) approximator is left out of
    /// the score; disabling both is rejected at model construction.
    pub fn with_approximators(upper: Option<ComplementedDistance>,
                              lower: Option<ComplementedDistance>,
                              nn_search: S) -> FRNN<S> {
        FRNN {
            upper: upper,
            lower: lower,
            nn_search: nn_search,
        }
    }
}

impl<S: NNSearch> Classifier for FRNN<S> {
    type Model = FRNNModel<S::Index>;

    fn construct(&self, inputs: &ArrayView2<f64>,
                 targets: &ArrayView1<usize>)
                 -> LearningResult<FRNNModel<S::Index>> {
        if self.upper.is_none() && self.lower.is_none() {
            return Err(Error::new(ErrorKind::InvalidParameters,
                                  "FRNN requires an upper or a lower approximator"));
        }

        let classes = canonical_classes(inputs, targets)?;
        let (same, complement) = split_by_class(inputs, targets, &classes);

        let upper = match self.upper {
            Some(ref approximator) => {
                same.into_iter()
                    .map(|c| approximator.construct(self.nn_search.construct(c)))
                    .collect()
            },
            None => vec![],
        };
        let lower = match self.lower {
            Some(ref approximator) => {
                complement.into_iter()
                          .map(|co| approximator.construct(self.nn_search.construct(co)))
                          .collect()
            },
            None => vec![],
        };

        Ok(FRNNModel {
            classes: classes,
            upper: upper,
            lower: lower,
        })
    }
}

/// A constructed FRNN model: per-class upper and/or lower
/// approximations, read-only after construction.
pub struct FRNNModel<I: Index> {
    classes: Vec<usize>,
    upper: Vec<Approximation<I>>,
    lower: Vec<Approximation<I>>,
}

impl<I: Index> ClassifierModel for FRNNModel<I> {
    fn classes(&self) -> &[usize] {
        &self.classes
    }

    /// Scores lie in [0,1]: each is the mean of the enabled upper
    /// approximation and complemented lower approximation.
    fn query(&self, inputs: &ArrayView2<f64>) -> Array2<f64> {
        let n_classes = self.classes.len();
        let mut scores = Array2::<f64>::zeros((inputs.rows(), n_classes));

        if inputs.rows() == 0 {
            return scores;
        }

        let mut parts = 0.;
        if !self.upper.is_empty() {
            parts += 1.;
            for (y, approximation) in self.upper.iter().enumerate() {
                for (i, &val) in approximation.query(inputs).iter().enumerate() {
                    scores[[i, y]] += val;
                }
            }
        }
        if !self.lower.is_empty() {
            parts += 1.;
            for (y, approximation) in self.lower.iter().enumerate() {
                for (i, &val) in approximation.query(inputs).iter().enumerate() {
                    scores[[i, y]] += 1. - val;
                }
            }
        }

        scores / parts
    }
}
