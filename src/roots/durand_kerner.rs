use num::{complex::Complex64, One, Zero};

use crate::{roots::Solution, util::casting::usize_to_f64, Poly};

/// Find all roots using the Durand-Kerner (Weierstrass) method.
///
/// Every iteration computes
/// `z_i' = z_i - P(z_i) / prod_{j != i} (z_i - z_j)` for all guesses from the
/// guesses of the *previous* iteration (Jacobi style), then replaces them all
/// at once. The loop stops as soon as the largest correction is at most
/// `epsilon`, or after `max_iter` iterations. In both cases the last iterate
/// is returned, with [`Solution::converged`] telling which one happened.
///
/// `guesses` is updated in-place and holds the roots afterwards.
///
/// A correction that is not finite ends the iteration early: the guesses of
/// the previous iteration are returned, not converged, with an infinite
/// [`Solution::max_correction`].
///
/// # Caveats
/// Repeated roots converge linearly instead of quadratically, so they often
/// hit `max_iter` and end up as a small cluster around the true root.
///
/// # Panics
/// In debug builds, if `poly` is not monic or the number of guesses differs
/// from the degree.
pub fn durand_kerner(
    poly: &Poly,
    guesses: &mut [Complex64],
    epsilon: f64,
    max_iter: usize,
) -> Solution {
    debug_assert!(poly.is_monic());
    debug_assert_eq!(guesses.len(), poly.degree());

    let n = guesses.len();
    let mut next = guesses.to_vec();
    let mut max_correction = f64::INFINITY;
    let mut iterations = 0;

    while iterations < max_iter {
        iterations += 1;
        max_correction = 0.0;

        for i in 0..n {
            let z = guesses[i];
            let denom = guesses
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .fold(Complex64::one(), |acc, (_, w)| acc * (z - w));

            if denom.is_zero() {
                // two guesses collided, push this one off and keep going
                let radius = epsilon.sqrt() * (1.0 + z.norm());
                next[i] = z + Complex64::from_polar(radius, 1.0 + usize_to_f64(i));
                max_correction = f64::INFINITY;
                continue;
            }

            let delta = poly.eval(z) / denom;
            if !delta.is_finite() {
                // overflow, the iteration cannot recover from NaN or infinity
                log::debug!(
                    "diverged: {{iterations: {iterations}, root: {i}, correction: {delta}}}"
                );
                return Solution {
                    roots: guesses.to_vec(),
                    iterations,
                    max_correction: f64::INFINITY,
                    converged: false,
                };
            }
            next[i] = z - delta;
            max_correction = max_correction.max(delta.norm());
        }

        guesses.copy_from_slice(&next);
        log::trace!("{guesses:?}");

        if max_correction <= epsilon {
            log::debug!("{{iterations: {iterations}, max_correction: {max_correction:e}}}");
            return Solution {
                roots: guesses.to_vec(),
                iterations,
                max_correction,
                converged: true,
            };
        }
    }

    log::debug!(
        "did not converge: {{iterations: {iterations}, max_correction: {max_correction:e}}}"
    );
    Solution {
        roots: guesses.to_vec(),
        iterations,
        max_correction,
        converged: false,
    }
}

#[cfg(test)]
mod test {
    use num::{complex::Complex64, Zero};

    use super::durand_kerner;
    use crate::{
        characteristic_polynomial,
        roots::{initial_guesses_spiral, solve},
        util::__testing::{check_roots, complex_roots_poly},
        Feedback, Poly, SolverConfig,
    };

    fn run(p: &Poly, epsilon: f64, max_iter: usize) -> crate::Solution {
        let mut guesses = vec![Complex64::zero(); p.degree()];
        initial_guesses_spiral(p, &mut guesses);
        durand_kerner(p, &mut guesses, epsilon, max_iter)
    }

    #[test]
    fn degree_1() {
        let sol = run(&poly![-3.0, 1.0], 1E-14, 100);
        assert!(sol.converged);
        assert!(sol.iterations <= 2);
        assert!(check_roots(sol.roots, vec![Complex64::new(3.0, 0.0)], 1E-12));
    }

    #[test]
    fn degree_3() {
        let expected = vec![
            Complex64::new(1.0, 0.0),
            Complex64::new(2.0, 0.0),
            Complex64::new(3.0, 0.0),
        ];
        let sol = run(&Poly::from_roots(&[1.0, 2.0, 3.0]), 1E-12, 500);
        assert!(sol.converged);
        assert!(check_roots(sol.roots, expected, 1E-10));
    }

    #[test]
    fn degree_3_complex() {
        let expected = vec![
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 1.0),
            Complex64::new(0.0, -1.0),
        ];
        // (x - 1)(x^2 + 1)
        let sol = run(&poly![-1.0, 1.0, -1.0, 1.0], 1E-12, 500);
        assert!(sol.converged);
        assert!(check_roots(sol.roots, expected, 1E-10));
    }

    #[test]
    fn conjugate_pairs() {
        let expected = vec![
            Complex64::new(-0.5, 2.0),
            Complex64::new(-0.5, -2.0),
            Complex64::new(-1.0, 0.5),
            Complex64::new(-1.0, -0.5),
        ];
        let p = complex_roots_poly(&expected);
        let sol = run(&p, 1E-12, 500);
        assert!(sol.converged);
        assert!(check_roots(sol.roots, expected, 1E-8));
    }

    #[test]
    fn multiplicity_3() {
        let expected = vec![
            Complex64::new(1.0, 0.0),
            Complex64::new(2.0, 0.0),
            Complex64::new(2.0, 0.0),
            Complex64::new(2.0, 0.0),
            Complex64::new(3.0, 0.0),
        ];
        let sol = run(&Poly::from_roots(&[1.0, 2.0, 2.0, 2.0, 3.0]), 1E-12, 500);
        assert_eq!(sol.roots.len(), 5);
        assert!(
            check_roots(sol.roots.clone(), expected, 1E-3),
            "{:?}",
            sol.roots
        );
    }

    #[test]
    fn colliding_guesses() {
        let p = poly![2.0, -3.0, 1.0];
        let mut guesses = vec![Complex64::zero(); 2];
        let sol = durand_kerner(&p, &mut guesses, 1E-12, 500);
        assert!(sol.converged);
        assert!(sol.iterations > 1);
        assert!(check_roots(
            sol.roots,
            vec![Complex64::new(1.0, 0.0), Complex64::new(2.0, 0.0)],
            1E-9
        ));
    }

    #[test]
    fn overflow_is_not_convergence() {
        // leading coefficient of 2^-52 puts the root bound around 1E21, the
        // 20th power of which does not fit in an f64
        let poles = [-1.0; 20];
        let p = characteristic_polynomial(&poles, &Feedback::new(0.0, 0.0, 1.0 - f64::EPSILON));
        assert_eq!(p.last(), f64::EPSILON);
        let sol = solve(&p, &SolverConfig::default()).unwrap();
        assert!(!sol.converged);
        assert_eq!(sol.max_correction, f64::INFINITY);
        assert_eq!(sol.roots.len(), 20);
    }

    #[test]
    fn overflowing_coefficients() {
        let p = Poly::from_roots(&[-1E30; 11]);
        let sol = solve(&p, &SolverConfig::default()).unwrap();
        assert!(!sol.converged);
        assert!(sol.iterations <= 1);
    }

    #[test]
    fn zero_iterations() {
        let p = poly![2.0, 3.0, 1.0];
        let mut guesses = vec![Complex64::zero(); 2];
        initial_guesses_spiral(&p, &mut guesses);
        let before = guesses.clone();
        let sol = durand_kerner(&p, &mut guesses, 1E-10, 0);
        assert!(!sol.converged);
        assert_eq!(sol.iterations, 0);
        assert_eq!(sol.roots, before);
    }
}
