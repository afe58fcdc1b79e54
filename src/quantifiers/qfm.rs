//! Top/bottom bound search and the quantification fuzzy mechanisms.
//!
//! A semi-fuzzy quantifier is a function from a tuple of crisp subsets
//! of a finite universe (one subset per argument) to a degree of truth
//! in [0,1]. The functions here extend such a quantifier to fuzzy
//! arguments: the three-valued cut of each fuzzy set at a level
//! `gamma` splits the universe into definitely-included, boundary and
//! excluded elements, and the quantifier is evaluated over every crisp
//! combination consistent with the cut, yielding tight upper (`top`)
//! and lower (`bottom`) bounds.
//!
//! WARNING: the search enumerates the power set of every boundary set
//! and the Cartesian product of the candidates across the fuzzy sets.
//! Its cost is exponential in the boundary sizes and multiplicative
//! across rows; this is the intended exact algorithm, and it is the
//! caller's responsibility to keep universes and fuzzy set families
//! small enough for it to be feasible. There is no abort path.
use std::f64;
use ndarray::prelude::*;


/// The cut of one fuzzy set: the definite-lower elements and the
/// boundary elements (definite-upper minus definite-lower), as
/// positions into the universe.
struct RowCut {
    lower: Vec<usize>,
    boundary: Vec<usize>,
}

impl RowCut {
    /// Cuts one row of membership degrees at level `gamma`.
    ///
    /// For `gamma > 0` the lower set takes memberships >= 0.5(1+gamma)
    /// and the upper set memberships > 0.5(1-gamma); at `gamma == 0`
    /// the bounds degenerate to > 0.5 and >= 0.5 respectively.
    fn new(gamma: f64, memberships: &ArrayView1<f64>) -> RowCut {
        let mut lower = vec![];
        let mut boundary = vec![];

        for (j, &m) in memberships.iter().enumerate() {
            let in_lower = if gamma > 0. {
                m >= 0.5 * (1. + gamma)
            } else {
                m > 0.5
            };
            let in_upper = if gamma > 0. {
                m > 0.5 * (1. - gamma)
            } else {
                m >= 0.5
            };

            if in_lower {
                lower.push(j);
            } else if in_upper {
                boundary.push(j);
            }
        }

        RowCut {
            lower: lower,
            boundary: boundary,
        }
    }
}

/// Lazy enumeration of the crisp combination space of a fuzzy set
/// family cut at level `gamma`.
///
/// Each item is one candidate combination: for every fuzzy set, its
/// definite-lower set united with one subset of its boundary set.
/// Combinations are produced by a mixed-radix counter over per-row
/// subset bitmasks, so the sequence is finite, deterministic, and
/// regenerable by constructing the iterator again; nothing is
/// materialized eagerly. A family with no rows yields the single
/// empty combination.
pub struct Combinations<'a, T: 'a> {
    universe: &'a [T],
    rows: Vec<RowCut>,
    masks: Vec<u64>,
    done: bool,
}

/// Cuts `fuzzy_sets` (rows = fuzzy sets, columns = universe elements)
/// at level `gamma` and returns the lazy combination space.
///
/// # Panics
///
/// If the boundary set of some row has 64 or more elements; such
/// power sets are beyond the supported (or indeed feasible) range of
/// the exact enumeration.
pub fn combinations<'a, T>(gamma: f64, universe: &'a [T],
                           fuzzy_sets: &ArrayView2<f64>) -> Combinations<'a, T> {
    let rows = fuzzy_sets.outer_iter()
                         .map(|row| RowCut::new(gamma, &row))
                         .collect::<Vec<_>>();

    for row in &rows {
        assert!(row.boundary.len() < 64,
                "Boundary set too large for power set enumeration");
    }

    let masks = vec![0; rows.len()];

    Combinations {
        universe: universe,
        rows: rows,
        masks: masks,
        done: false,
    }
}

impl<'a, T: Clone + 'a> Iterator for Combinations<'a, T> {
    type Item = Vec<Vec<T>>;

    fn next(&mut self) -> Option<Vec<Vec<T>>> {
        if self.done {
            return None;
        }

        // Materialize the combination for the current counter state:
        // per row, the definite-lower elements followed by the
        // boundary elements selected by the row's bitmask.
        let combination = self.rows
            .iter()
            .zip(&self.masks)
            .map(|(row, &mask)| {
                row.lower
                   .iter()
                   .map(|&j| self.universe[j].clone())
                   .chain(row.boundary
                              .iter()
                              .enumerate()
                              .filter(|&(b, _)| mask >> b & 1 == 1)
                              .map(|(_, &j)| self.universe[j].clone()))
                   .collect()
            })
            .collect();

        // Advance the mixed-radix counter; radix of row i is the size
        // of its boundary power set.
        let mut i = 0;
        loop {
            if i == self.rows.len() {
                self.done = true;
                break;
            }
            self.masks[i] += 1;
            if self.masks[i] < 1u64 << self.rows[i].boundary.len() {
                break;
            }
            self.masks[i] = 0;
            i += 1;
        }

        Some(combination)
    }
}

/// Evaluates `quantifier` over the whole combination space of
/// `fuzzy_sets` cut at `gamma`, and returns the pair (top, bottom):
/// the maximum and minimum quantifier values observed.
///
/// The quantifier receives one crisp subset per fuzzy set row. See
/// the module documentation for the exponential cost caveat.
pub fn top_bottom<T, Q>(gamma: f64, universe: &[T],
                        fuzzy_sets: &ArrayView2<f64>, quantifier: &Q)
        -> (f64, f64)
        where T: Clone, Q: Fn(&[Vec<T>]) -> f64 {
    let mut top = f64::NEG_INFINITY;
    let mut bottom = f64::INFINITY;

    for combination in combinations(gamma, universe, fuzzy_sets) {
        let val = quantifier(&combination);
        top = top.max(val);
        bottom = bottom.min(val);
    }

    (top, bottom)
}

/// The upper bound of the quantifier over the combination space at
/// cut level `gamma`.
pub fn top<T, Q>(gamma: f64, universe: &[T], fuzzy_sets: &ArrayView2<f64>,
                 quantifier: &Q) -> f64
        where T: Clone, Q: Fn(&[Vec<T>]) -> f64 {
    top_bottom(gamma, universe, fuzzy_sets, quantifier).0
}

/// The lower bound of the quantifier over the combination space at
/// cut level `gamma`.
pub fn bottom<T, Q>(gamma: f64, universe: &[T], fuzzy_sets: &ArrayView2<f64>,
                    quantifier: &Q) -> f64
        where T: Clone, Q: Fn(&[Vec<T>]) -> f64 {
    top_bottom(gamma, universe, fuzzy_sets, quantifier).1
}

/// The quantification fuzzy mechanism (QFM) at cut level `gamma`.
///
/// Resolves the top/bottom bounds into a single degree of truth by a
/// three-way selection: the bottom bound if it exceeds 0.5, else the
/// top bound if it falls below 0.5, else exactly 0.5.
pub fn qfm<T, Q>(gamma: f64, universe: &[T], fuzzy_sets: &ArrayView2<f64>,
                 quantifier: &Q) -> f64
        where T: Clone, Q: Fn(&[Vec<T>]) -> f64 {
    let (top, bottom) = top_bottom(gamma, universe, fuzzy_sets, quantifier);

    if bottom > 0.5 {
        bottom
    } else if top < 0.5 {
        top
    } else {
        0.5
    }
}

/// The integrated quantification mechanism (QFM-OWA).
///
/// Approximates the integral over gamma in [0,1] of the average of
/// the top and bottom bounds, with the trapezoidal rule over `n >= 1`
/// subdivisions: endpoints weighted 0.5, interior points weighted 1,
/// the weighted sum scaled by the step h = 1/n. The full bound search
/// runs at each of the n+1 cut levels, so the exponential cost caveat
/// applies n+1 times over.
///
/// # Panics
///
/// If `n == 0`.
pub fn qfm_owa<T, Q>(universe: &[T], fuzzy_sets: &ArrayView2<f64>, n: usize,
                     quantifier: &Q) -> f64
        where T: Clone, Q: Fn(&[Vec<T>]) -> f64 {
    assert!(n >= 1);

    let h = 1. / n as f64;

    let average = |gamma| {
        let (top, bottom) = top_bottom(gamma, universe, fuzzy_sets, quantifier);
        (top + bottom) / 2.
    };

    let mut result = 0.5 * (average(0.) + average(1.));
    for i in 1..n {
        result += average(i as f64 * h);
    }

    result * h
}


#[cfg(test)]
mod tests {
    use super::*;
    use quantifiers::choquet::most;

    /// "Most elements of the universe belong to the (single) fuzzy
    /// set": a proportional semi-fuzzy quantifier through Zadeh's
    /// "most".
    fn most_of(n_universe: usize) -> impl Fn(&[Vec<u32>]) -> f64 {
        move |sets: &[Vec<u32>]| most(sets[0].len() as f64 / n_universe as f64)
    }

    #[test]
    fn cut_candidates() {
        let universe = [10u32, 11, 12, 13];
        let fuzzy_sets = array![[0.9, 0.8, 0.3, 0.55]];

        // At gamma = 0.2: lower = {10, 11}, boundary = {13}.
        let candidates = combinations(0.2, &universe, &fuzzy_sets.view())
                             .collect::<Vec<_>>();

        assert!(candidates == vec![vec![vec![10, 11]],
                                   vec![vec![10, 11, 13]]]);
    }

    /// The combination space is the Cartesian product of the per-row
    /// candidates, and an empty family yields one empty combination.
    #[test]
    fn combination_space() {
        let universe = [0u32, 1, 2];
        let fuzzy_sets = array![[0.9, 0.55, 0.45],
                                [0.45, 0.2, 0.8]];

        // At gamma = 0.2: row 0 has lower {0}, boundary {1, 2};
        // row 1 has lower {2}, boundary {0}. 4 * 2 combinations.
        let combos = combinations(0.2, &universe, &fuzzy_sets.view())
                         .collect::<Vec<_>>();
        assert!(combos.len() == 8);
        for combo in &combos {
            assert!(combo.len() == 2);
            assert!(combo[0].contains(&0) && combo[1].contains(&2));
        }

        let empty = Array2::<f64>::zeros((0, 3));
        let combos = combinations(0.2, &universe, &empty.view())
                         .collect::<Vec<_>>();
        assert!(combos == vec![Vec::<Vec<u32>>::new()]);
    }

    /// A boundary set of 64 elements exceeds the supported bitmask
    /// width and is rejected up front.
    #[test]
    #[should_panic]
    fn oversized_boundary_set() {
        let universe = (0..64).collect::<Vec<u32>>();
        // At gamma = 0.2, membership 0.5 lands in the boundary set.
        let fuzzy_sets = Array2::<f64>::from_elem((1, 64), 0.5);
        let _ = combinations(0.2, &universe, &fuzzy_sets.view());
    }

    #[test]
    fn top_bottom_bounds() {
        let universe = [0u32, 1, 2, 3];
        let fuzzy_sets = array![[0.9, 0.8, 0.3, 0.55]];
        let q = most_of(universe.len());

        // Candidates are {0, 1} and {0, 1, 3}: most(0.5) and most(0.75).
        let (top, bottom) = top_bottom(0.2, &universe, &fuzzy_sets.view(), &q);
        assert_relative_eq!(top, most(0.75), epsilon = 1e-12);
        assert_relative_eq!(bottom, most(0.5), epsilon = 1e-12);
        assert!(top >= bottom);

        // top >= bottom across cut levels.
        for i in 0..11 {
            let gamma = i as f64 / 10.;
            let (top, bottom) = top_bottom(gamma, &universe,
                                           &fuzzy_sets.view(), &q);
            assert!(top >= bottom);
        }
    }

    /// The three-way selection rule of the QFM.
    #[test]
    fn qfm_selection() {
        let universe = [0u32, 1, 2, 3];
        let q = most_of(universe.len());

        // Bounds straddle 0.5 (most(0.5) < 0.5 < most(0.75)).
        let fuzzy_sets = array![[0.9, 0.8, 0.3, 0.55]];
        assert!(qfm(0.2, &universe, &fuzzy_sets.view(), &q) == 0.5);

        // All four elements definite: both bounds are most(1) = 1.
        let fuzzy_sets = array![[0.9, 0.8, 0.9, 0.7]];
        assert!(qfm(0.2, &universe, &fuzzy_sets.view(), &q) == 1.);

        // No element reaches the upper cut: both bounds are most(0) = 0.
        let fuzzy_sets = array![[0.1, 0.2, 0.3, 0.2]];
        assert!(qfm(0.2, &universe, &fuzzy_sets.view(), &q) == 0.);
    }

    /// With a single subdivision, QFM-OWA reduces to the trapezoidal
    /// average of the bound averages at gamma = 0 and gamma = 1 only.
    #[test]
    fn qfm_owa_single_subdivision() {
        let universe = [0u32, 1, 2, 3];
        let fuzzy_sets = array![[0.9, 0.8, 0.3, 0.55]];
        let q = most_of(universe.len());

        let average = |gamma| {
            let (top, bottom) = top_bottom(gamma, &universe,
                                           &fuzzy_sets.view(), &q);
            (top + bottom) / 2.
        };

        let expected = 0.5 * (average(0.) + average(1.));
        assert_relative_eq!(qfm_owa(&universe, &fuzzy_sets.view(), 1, &q),
                            expected, epsilon = 1e-12);

        // More subdivisions stay within the bound envelope.
        let integrated = qfm_owa(&universe, &fuzzy_sets.view(), 10, &q);
        assert!(integrated >= 0. && integrated <= 1.);
    }
}
