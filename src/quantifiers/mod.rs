//! Module defining generalized quantifier evaluation.
//!
//! The functions in this module form a self-contained mathematical
//! toolkit: the discrete Choquet integral, crisp RIM quantifiers,
//! Zadeh's S-function quantifiers, three-valued cuts, and the
//! quantification fuzzy mechanisms (QFM, QFM-OWA) which extend a
//! caller-supplied semi-fuzzy quantifier over a finite universe into
//! a scalar degree of truth.
pub mod choquet;
pub mod qfm;

pub use self::choquet::{choquet_integral, more_than, at_least, zadeh_function,
                        most, some, a_min, a_max, three_valued_cut,
                        gen_fuzzy_median};
pub use self::qfm::{combinations, Combinations, top_bottom, top, bottom, qfm,
                    qfm_owa};
