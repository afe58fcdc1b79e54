//! The fuzzy-rough crate.
//!
//! A crate implementing fuzzy rough set Machine Learning methods for
//! nearest neighbour classification of numeric tabular data, and related
//! generalized quantifier evaluation machinery (Choquet integral,
//! quantification fuzzy mechanisms).
//!
//!
//! # Goals
//! * Fast implementation of OWA-based fuzzy rough classifiers (FRNN,
//!   FROVOCO).
//! * Should easily allow to wrap existing rust implementations of
//!   nearest neighbour search structures.
//! * Provide the quantifier toolkit as a standalone module, usable to
//!   extend any semi-fuzzy quantifier over a finite universe.
//!
//! # Examples
//!
//! Construct an FRNN classifier model from a small training set and
//! query it with two test vector inputs.
//!
//! The output scores will be a matrix, one row per each test input,
//! and one column per class, where each element is the averaged
//! upper/lower fuzzy rough approximation of the class membership of
//! the input.
//!
//! ```
//! #[macro_use(array)]
//! extern crate ndarray;
//! extern crate fuzzy_rough;
//!
//! # fn main() {
//! use fuzzy_rough::ensemble::*;
//!
//! let frnn = FRNN::default();
//! let train_inputs = array![[0., 0.],
//!                           [1., 0.],
//!                           [0., 1.],
//!                           [10., 10.],
//!                           [11., 10.],
//!                           [10., 11.]];
//! let train_targets = array![0, 0, 0, 1, 1, 1];
//! let test_inputs = array![[0., 0.],
//!                          [10., 10.]];
//!
//! // Construct the model and query it.
//! let model = frnn.construct(&train_inputs.view(), &train_targets.view())
//!                 .expect("Failed to construct model");
//! let scores = model.query(&test_inputs.view());
//!
//! assert!(scores.rows() == 2 && scores.cols() == 2);
//! assert!(scores[[0, 0]] > scores[[0, 1]]);
//! assert!(scores[[1, 1]] > scores[[1, 0]]);
//! # }
//! ```
//!
//! More examples on the classifiers at [FRNN](/ensemble/frnn/struct.FRNN.html)
//! and [FROVOCO](/ensemble/frovoco/struct.FROVOCO.html).
//#![warn(missing_docs)]

extern crate rand;
extern crate pcg_rand;
extern crate itertools;
extern crate lazysort;
extern crate ordered_float;
extern crate rusty_machine;
#[macro_use]
extern crate ndarray;
#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod quantifiers;
pub mod owa;
pub mod nn;
pub mod approximation;
pub mod ensemble;
