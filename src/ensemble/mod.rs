//! Module defining ensemble fuzzy rough classifiers.
//!
//! A `Classifier` constructs a read-only `ClassifierModel` from a
//! training set (feature matrix plus one class label per row); the
//! model answers batch queries with one score per probe instance and
//! per class. The class order is fixed once at construction (sorted
//! unique labels) and score columns align to it positionally on every
//! query.
pub mod frnn;
pub mod frovoco;

use itertools::Itertools;
use ndarray::prelude::*;
use rusty_machine::learning::LearningResult;
use rusty_machine::learning::error::{Error, ErrorKind};

pub use self::frnn::{FRNN, FRNNModel};
pub use self::frovoco::{FROVOCO, FROVOCOModel};


/// A classifier: constructs a queryable model from labeled training
/// data.
pub trait Classifier {
    /// The type of the constructed model.
    type Model: ClassifierModel;

    /// Constructs a model from the training `inputs` (one row per
    /// instance) and their `targets` (one class label per row).
    ///
    /// Fails with an `InvalidData` error if the number of inputs and
    /// targets mismatch, or if fewer than 2 classes are present (the
    /// ensemble combination requires a complement class).
    fn construct(&self, inputs: &ArrayView2<f64>,
                 targets: &ArrayView1<usize>) -> LearningResult<Self::Model>;
}

/// A constructed classification model. Read-only: repeated queries
/// never mutate the model, so queries may run concurrently.
pub trait ClassifierModel {
    /// The canonical class order fixed at construction.
    fn classes(&self) -> &[usize];

    /// Returns the class membership scores of every row of `inputs`:
    /// a matrix with one row per probe instance and one column per
    /// class, in canonical class order. An empty probe matrix yields
    /// a `(0, n_classes)` result rather than an error.
    fn query(&self, inputs: &ArrayView2<f64>) -> Array2<f64>;
}

/// Derives the canonical class order (sorted unique labels) from a
/// training set, validating the construction contract.
fn canonical_classes(inputs: &ArrayView2<f64>, targets: &ArrayView1<usize>)
                     -> LearningResult<Vec<usize>> {
    if inputs.rows() != targets.len() {
        return Err(Error::new(ErrorKind::InvalidData,
                              "Inconsistent number of training inputs and targets"));
    }

    let classes = targets.iter()
                         .cloned()
                         .unique()
                         .sorted();

    if classes.len() < 2 {
        return Err(Error::new(ErrorKind::InvalidData,
                              "Training requires at least 2 classes"));
    }

    Ok(classes)
}

/// Splits inputs according to their labels.
///
/// Returns, for each class `y` of `classes` in order, a matrix with
/// the inputs labeled `y` and a matrix with the inputs labeled
/// anything but `y` (the complement class).
fn split_by_class(inputs: &ArrayView2<f64>, targets: &ArrayView1<usize>,
                  classes: &[usize]) -> (Vec<Array2<f64>>, Vec<Array2<f64>>) {
    let d = inputs.cols();
    let mut same = vec![];
    let mut complement = vec![];

    for &y in classes {
        let inputs_y = inputs.outer_iter()
                             .zip(targets)
                             .filter(|&(_, t)| *t == y)
                             .flat_map(|(x, _)| x.to_vec())
                             .collect::<Vec<_>>();
        let inputs_co_y = inputs.outer_iter()
                                .zip(targets)
                                .filter(|&(_, t)| *t != y)
                                .flat_map(|(x, _)| x.to_vec())
                                .collect::<Vec<_>>();

        same.push(Array::from_shape_vec((inputs_y.len() / d, d), inputs_y)
                        .expect("Unexpected error in reshaping"));
        complement.push(Array::from_shape_vec((inputs_co_y.len() / d, d),
                                              inputs_co_y)
                              .expect("Unexpected error in reshaping"));
    }

    (same, complement)
}
