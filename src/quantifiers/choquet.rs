//! Choquet integral, RIM and Zadeh quantifiers, three-valued cuts.
use std::cmp::Reverse;
use ordered_float::OrderedFloat;
use ndarray::prelude::*;


/// Computes the discrete Choquet integral of a function `f` with
/// respect to a fuzzy measure `mu`.
///
/// `f` holds one non-negative value per element of the universe,
/// `mu` one degree in [0,1] per element; the two are paired by
/// position and need not be sorted.
///
/// The sorted measure values act as level-set weights: at each level
/// the residual mass of `f` is clipped to the level and accumulated,
/// then subtracted (clamped at zero). No explicit capacity on subsets
/// is needed, since the construction uses the co-monotone shortcut.
/// The integral is invariant under any joint permutation of `f` and
/// `mu`. Degenerate empty inputs integrate to 0.
///
/// # Examples
///
/// ```
/// #[macro_use(array)]
/// extern crate ndarray;
/// extern crate fuzzy_rough;
///
/// # fn main() {
/// use fuzzy_rough::quantifiers::choquet_integral;
///
/// let f = array![0.5, 0.25];
/// let mu = array![0.5, 0.5];
/// assert!(choquet_integral(&f.view(), &mu.view()) == 0.375);
/// # }
/// ```
pub fn choquet_integral(f: &ArrayView1<f64>, mu: &ArrayView1<f64>) -> f64 {
    let mut mu_sorted = mu.to_vec();
    mu_sorted.sort_by_key(|&m| Reverse(OrderedFloat(m)));

    let mut residual = f.to_vec();
    let mut integral = 0.;

    for &m in &mu_sorted {
        integral += m * residual.iter()
                                .map(|&v| v.min(m))
                                .sum::<f64>();
        for v in residual.iter_mut() {
            *v = (*v - m).max(0.);
        }
    }

    integral
}

/// RIM quantifier "more than 100*k%": 1 if the proportion `p`
/// strictly exceeds the threshold `k`, else 0.
pub fn more_than(k: f64, p: f64) -> f64 {
    if p > k {
        1.
    } else {
        0.
    }
}

/// RIM quantifier "at least 100*k%": 1 if the proportion `p` reaches
/// the threshold `k`, else 0. Never stricter than `more_than`.
pub fn at_least(k: f64, p: f64) -> f64 {
    if p >= k {
        1.
    } else {
        0.
    }
}

/// Zadeh's S-function with knots `a < b`.
///
/// Rises from 0 at `p <= a` to 1 at `p >= b` through two quadratic
/// pieces which agree exactly at the midpoint `(a + b) / 2`.
pub fn zadeh_function(a: f64, b: f64, p: f64) -> f64 {
    if p <= a {
        0.
    } else if p <= (a + b) / 2. {
        2. * (p - a).powi(2) / (b - a).powi(2)
    } else if p <= b {
        1. - 2. * (p - b).powi(2) / (b - a).powi(2)
    } else {
        1.
    }
}

/// The quantifier "most", i.e. the S-function with knots 0.3 and 0.9.
pub fn most(p: f64) -> f64 {
    zadeh_function(0.3, 0.9, p)
}

/// The quantifier "some", i.e. the S-function with knots 0.1 and 0.4.
pub fn some(p: f64) -> f64 {
    zadeh_function(0.1, 0.4, p)
}

/// Membership in the set A_min at crispness level `gamma`.
///
/// NOTE: the `gamma == 0` branch tests `val > 0.5` / `val == 0.5`,
/// while the `gamma > 0` branch uses strict bounds on the open band
/// `(0.5(1-gamma), 0.5(1+gamma))`. The boundary strictness of the two
/// branches differs deliberately and is kept as defined.
pub fn a_min(gamma: f64, val: f64) -> f64 {
    if gamma > 0. {
        if val > 0.5 * (1. + gamma) {
            1.
        } else if val > 0.5 * (1. - gamma) && val < 0.5 * (1. + gamma) {
            0.5
        } else {
            0.
        }
    } else {
        if val > 0.5 {
            1.
        } else if val == 0.5 {
            0.5
        } else {
            0.
        }
    }
}

/// Membership in the set A_max at crispness level `gamma`.
pub fn a_max(gamma: f64, val: f64) -> f64 {
    if gamma > 0. {
        if val > 0.5 * (1. - gamma) {
            0.5
        } else {
            0.
        }
    } else {
        if val >= 0.5 {
            0.5
        } else {
            0.
        }
    }
}

/// The three-valued cut of a membership value at level `gamma`:
/// crispifies `val` into one of {0, 0.5, 1}.
pub fn three_valued_cut(gamma: f64, val: f64) -> f64 {
    a_min(gamma, val).max(a_max(gamma, val))
}

/// The generalized fuzzy median of two degrees of truth.
///
/// Returns the smaller if both exceed 0.5, the larger if both are
/// below 0.5, and exactly 0.5 otherwise.
pub fn gen_fuzzy_median(a: f64, b: f64) -> f64 {
    if a.min(b) > 0.5 {
        a.min(b)
    } else if a.max(b) < 0.5 {
        a.max(b)
    } else {
        0.5
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    /// For a constant measure with f vanishing nowhere above the
    /// level, the integral reduces to m * sum(f).
    #[test]
    fn choquet_constant_measure() {
        let f = array![0.2, 0.5, 0.3];
        let mu = array![1., 1., 1.];
        assert_relative_eq!(choquet_integral(&f.view(), &mu.view()), 1.0);

        let f = array![0.4, 0.2];
        let mu = array![0.5, 0.5];
        assert_relative_eq!(choquet_integral(&f.view(), &mu.view()),
                            0.5 * (0.4 + 0.2));
    }

    /// For a 0/1 measure with f supported on the measure's support,
    /// the integral picks out the f values where mu is 1.
    #[test]
    fn choquet_crisp_measure() {
        let f = array![0.3, 0., 0.4];
        let mu = array![1., 0., 1.];
        assert_relative_eq!(choquet_integral(&f.view(), &mu.view()), 0.7);
    }

    /// The integral is invariant under a joint permutation of f
    /// and mu.
    #[test]
    fn choquet_permutation_invariant() {
        let f = array![0.9, 0.1, 0.6, 0.3];
        let mu = array![0.2, 0.8, 0.5, 1.];
        let f_perm = array![0.3, 0.6, 0.9, 0.1];
        let mu_perm = array![1., 0.5, 0.2, 0.8];

        assert_relative_eq!(choquet_integral(&f.view(), &mu.view()),
                            choquet_integral(&f_perm.view(), &mu_perm.view()),
                            epsilon = 1e-12);
    }

    #[test]
    fn choquet_empty() {
        let f = Array1::<f64>::zeros(0);
        let mu = Array1::<f64>::zeros(0);
        assert!(choquet_integral(&f.view(), &mu.view()) == 0.);
    }

    /// at_least() is never stricter than more_than().
    #[test]
    fn rim_quantifiers() {
        for &k in &[0., 0.3, 0.5, 1.] {
            for &p in &[0., 0.299, 0.3, 0.5, 0.999, 1.] {
                assert!(at_least(k, p) >= more_than(k, p));
            }
        }
        assert!(more_than(0.5, 0.5) == 0.);
        assert!(at_least(0.5, 0.5) == 1.);
    }

    /// The S-function is 0 at a, 1 at b, and both quadratic pieces
    /// agree at the midpoint.
    #[test]
    fn zadeh_continuity() {
        let (a, b) = (0.3, 0.9);
        let mid = (a + b) / 2.;

        assert!(zadeh_function(a, b, a) == 0.);
        assert!(zadeh_function(a, b, b) == 1.);

        let rising = 2. * (mid - a).powi(2) / (b - a).powi(2);
        let falling = 1. - 2. * (mid - b).powi(2) / (b - a).powi(2);
        assert_relative_eq!(rising, falling, epsilon = 1e-12);
        assert_relative_eq!(zadeh_function(a, b, mid), rising, epsilon = 1e-12);

        assert_relative_eq!(most(0.5), 2. * (0.5 - 0.3f64).powi(2) / 0.36,
                            epsilon = 1e-12);
        assert_relative_eq!(some(0.25), 1. - 2. * (0.25 - 0.4f64).powi(2) / 0.09,
                            epsilon = 1e-12);
    }

    /// The three-valued cut only ever takes values in {0, 0.5, 1}.
    #[test]
    fn cut_codomain() {
        for &gamma in &[0., 0.2, 0.5, 1.] {
            for i in 0..101 {
                let val = i as f64 / 100.;
                let cut = three_valued_cut(gamma, val);
                assert!(cut == 0. || cut == 0.5 || cut == 1.);
            }
        }
    }

    /// Boundary strictness of the gamma = 0 branches.
    #[test]
    fn cut_at_zero_gamma() {
        assert!(a_min(0., 0.5) == 0.5);
        assert!(a_min(0., 0.5 + 1e-12) == 1.);
        assert!(a_max(0., 0.5) == 0.5);
        assert!(a_max(0., 0.5 - 1e-12) == 0.);
        assert!(three_valued_cut(0., 0.5) == 0.5);
    }

    /// The generalized fuzzy median is symmetric, and equals 0.5
    /// whenever 0.5 lies between its arguments.
    #[test]
    fn fuzzy_median() {
        for &(a, b) in &[(0.6, 0.8), (0.1, 0.4), (0.2, 0.9), (0.5, 0.7),
                         (0.3, 0.5), (0.5, 0.5)] {
            assert!(gen_fuzzy_median(a, b) == gen_fuzzy_median(b, a));
        }

        assert!(gen_fuzzy_median(0.6, 0.8) == 0.6);
        assert!(gen_fuzzy_median(0.1, 0.4) == 0.4);
        assert!(gen_fuzzy_median(0.2, 0.9) == 0.5);
        assert!(gen_fuzzy_median(0.5, 0.9) == 0.5);
        assert!(gen_fuzzy_median(0.1, 0.5) == 0.5);
    }
}
