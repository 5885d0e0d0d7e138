//! Testing utilities, do not depend on any of these in production!

use fastrand::Rng;
use itertools::Itertools;
use num::{complex::Complex64, One, Zero};

use crate::Poly;

use super::float::f64_make_nonzero;

struct RandStreamF64 {
    state: Rng,
}

impl RandStreamF64 {
    fn new(seed: u64) -> Self {
        Self {
            state: Rng::with_seed(seed),
        }
    }
}

impl Iterator for RandStreamF64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        // NOTE: I think fastrand::f64 does not emit subnormals, but just in case
        Some(f64_make_nonzero(self.state.f64()))
    }
}

/// Endless stream of uniformly distributed reals in `[min, max)`.
pub struct RandStreamR64 {
    real_stream: RandStreamF64,
    min: f64,
    max: f64,
}

impl RandStreamR64 {
    #[must_use]
    pub fn new(seed: u64, min: f64, max: f64) -> Self {
        assert!(min <= max, "minimum should be smaller or equal to maximum");
        Self {
            real_stream: RandStreamF64::new(seed),
            min,
            max,
        }
    }
}

impl Iterator for RandStreamR64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some((self.real_stream.next()?).mul_add(self.max - self.min, self.min))
    }
}

/// Endless stream of complex numbers in a rectangle of the complex plane.
pub struct RandStreamC64Cartesian {
    real_stream: RandStreamF64,
    min_re: f64,
    max_re: f64,
    min_im: f64,
    max_im: f64,
}

impl RandStreamC64Cartesian {
    #[must_use]
    pub fn new(seed: u64, min_re: f64, max_re: f64, min_im: f64, max_im: f64) -> Self {
        assert!(
            min_re <= max_re && min_im <= max_im,
            "minimum should be smaller or equal to maximum"
        );
        Self {
            real_stream: RandStreamF64::new(seed),
            min_re,
            max_re,
            min_im,
            max_im,
        }
    }
}

impl Iterator for RandStreamC64Cartesian {
    type Item = Complex64;

    fn next(&mut self) -> Option<Self::Item> {
        let re = (self.real_stream.next()?).mul_add(self.max_re - self.min_re, self.min_re);
        let im = (self.real_stream.next()?).mul_add(self.max_im - self.min_im, self.min_im);
        Some(Complex64::new(re, im))
    }
}

/// Expand `prod (x - r)` over complex roots and keep the real parts.
///
/// Only meaningful when the roots come in conjugate pairs, otherwise the
/// imaginary parts that get dropped are not zero.
#[must_use]
pub fn complex_roots_poly(roots: &[Complex64]) -> Poly {
    let coeffs = roots.iter().fold(vec![Complex64::one()], |acc, r| {
        let mut out = vec![Complex64::zero(); acc.len() + 1];
        for (i, c) in acc.iter().enumerate() {
            out[i] -= *c * *r;
            out[i + 1] += *c;
        }
        out
    });
    Poly::new(coeffs.into_iter().map(|c| c.re).collect())
}

/// Generate one test case where the real roots are known and can be compared
///
/// The polynomial is scaled by a random factor so it is not monic.
pub fn test_case_roots(
    roots_stream: impl Iterator<Item = f64>,
    mut scale_stream: impl Iterator<Item = f64>,
    degree: usize,
) -> (Poly, Vec<Complex64>) {
    let roots = roots_stream.take(degree).collect_vec();
    let scale = scale_stream.next().expect("rng stream should be infinite");
    let poly = Poly::from_roots(&roots) * scale;
    (poly, roots.into_iter().map(Complex64::from).collect())
}

/// Generate one test case with conjugate pairs of roots, plus one real root
/// for odd degrees.
pub fn test_case_conj_roots(
    mut roots_stream: impl Iterator<Item = Complex64>,
    mut scale_stream: impl Iterator<Item = f64>,
    degree: usize,
) -> (Poly, Vec<Complex64>) {
    let mut roots = roots_stream
        .by_ref()
        .take(degree / 2)
        .flat_map(|z| [z, z.conj()])
        .collect_vec();
    if degree % 2 == 1 {
        let z = roots_stream.next().expect("rng stream should be infinite");
        roots.push(Complex64::from(z.re));
    }
    let scale = scale_stream.next().expect("rng stream should be infinite");
    let poly = complex_roots_poly(&roots) * scale;
    (poly, roots)
}

/// Check that all roots have been found
#[must_use]
pub fn check_roots(roots1: Vec<Complex64>, mut roots2: Vec<Complex64>, tol: f64) -> bool {
    if roots1.len() != roots2.len() {
        return false;
    }

    for r1 in roots1 {
        let mut best_idx = 0;
        let mut best_d = f64::MAX;
        for (i, r2) in roots2.iter().enumerate() {
            let d = (r1 - r2).norm();
            if d < best_d {
                best_idx = i;
                best_d = d;
            }
        }
        if best_d > tol {
            return false;
        }
        roots2.remove(best_idx);
    }
    true
}
