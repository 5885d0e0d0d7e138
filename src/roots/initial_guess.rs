use std::f64::consts::TAU;

use fastrand::Rng;
use num::{complex::Complex64, Zero};

use crate::{util::casting::usize_to_f64, Poly};

/// Argument of `0.4 + 0.9i`, the classic Durand-Kerner seed. It is not a
/// rational multiple of pi, so its powers never repeat and never line up
/// symmetrically around the real axis.
fn spiral_angle() -> f64 {
    0.9_f64.atan2(0.4)
}

/// The radius of a disk containing all the roots
///
/// Uses Cauchy's bound `1 + max |a_i / a_n|`.
#[must_use]
pub fn upper_bound(poly: &Poly) -> f64 {
    debug_assert!(
        poly.degree() >= 1,
        "there are no bounds for a polynomial with no roots"
    );
    let last = poly.last();
    let max_term = poly
        .iter()
        .take(poly.degree())
        .map(|c| (c / last).abs())
        .fold(0.0, f64::max);
    1.0 + max_term
}

/// The radius of a disk containing none of the roots
///
/// Zero when zero is a root.
#[must_use]
pub fn lower_bound(poly: &Poly) -> f64 {
    if poly[0].is_zero() {
        return 0.0;
    }
    let reversed = Poly::new(poly.iter().rev().copied().collect());
    upper_bound(&reversed).recip()
}

/// Guesses on a circle of radius [`upper_bound`], rotated by a fixed
/// irrational angle from one to the next.
pub fn initial_guesses_spiral(poly: &Poly, out: &mut [Complex64]) {
    let radius = upper_bound(poly);
    let angle = spiral_angle();
    for (k, y) in out.iter_mut().enumerate() {
        *y = Complex64::from_polar(radius, angle * usize_to_f64(k));
    }
}

/// Guesses drawn uniformly from the annulus between [`lower_bound`] and
/// [`upper_bound`].
pub fn initial_guesses_random(poly: &Poly, seed: u64, out: &mut [Complex64]) {
    let mut rng = Rng::with_seed(seed);
    let low = lower_bound(poly);
    let high = upper_bound(poly);
    let span = high - low;
    for y in out {
        let radius = rng.f64().mul_add(span, low);
        let angle = rng.f64() * TAU;
        *y = Complex64::from_polar(radius, angle);
    }
}
