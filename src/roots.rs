//! Finding all roots of a real polynomial.
//!
//! The workhorse is [`durand_kerner`], a simultaneous iteration that moves
//! one guess per root at every step. [`find_roots`] and [`solve`] wrap it with
//! input checks, monic normalization and initial guesses.

use num::{complex::Complex64, Zero};

use crate::{util::doc_macros::errors_degenerate, Error, Poly, Result};

mod durand_kerner;
pub use durand_kerner::durand_kerner;
mod initial_guess;
pub use initial_guess::{initial_guesses_random, initial_guesses_spiral, lower_bound, upper_bound};

/// How the starting points of the iteration are placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InitialGuess {
    /// Successive powers of a fixed complex rotation, on a circle enclosing
    /// all roots. Deterministic.
    #[default]
    Spiral,
    /// Uniformly in the annulus between the lower and upper root bounds,
    /// seeded.
    Random { seed: u64 },
}

/// Tuning knobs for the root finder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig {
    /// Stop once no root moves more than this in one iteration
    pub epsilon: f64,
    /// Hard cap on iterations, the last iterate is returned when it is hit
    pub max_iter: usize,
    pub initial_guess: InitialGuess,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            epsilon: 1E-10,
            max_iter: 500,
            initial_guess: InitialGuess::Spiral,
        }
    }
}

/// Output of a root finder run.
///
/// Not converging is not an error, the roots are still the best estimate
/// available and are usually good enough to plot.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// One root per degree, in no particular order
    pub roots: Vec<Complex64>,
    pub iterations: usize,
    /// Largest correction applied in the last iteration
    pub max_correction: f64,
    pub converged: bool,
}

impl Solution {
    #[must_use]
    pub fn into_roots(self) -> Vec<Complex64> {
        self.roots
    }
}

/// Find all roots with [`SolverConfig::default`].
///
/// # Errors
#[doc = errors_degenerate!()]
pub fn find_roots(poly: &Poly) -> Result<Vec<Complex64>> {
    solve(poly, &SolverConfig::default()).map(Solution::into_roots)
}

/// Find all roots of `poly`, exactly `poly.degree()` of them.
///
/// # Errors
#[doc = errors_degenerate!()]
pub fn solve(poly: &Poly, config: &SolverConfig) -> Result<Solution> {
    if poly.degree() == 0 {
        return Err(Error::DegreeTooLow);
    }
    if poly.last().is_zero() {
        return Err(Error::ZeroLeadingCoefficient);
    }

    let mut monic = poly.clone();
    monic.make_monic();

    let mut guesses = vec![Complex64::zero(); monic.degree()];
    match config.initial_guess {
        InitialGuess::Spiral => initial_guesses_spiral(&monic, &mut guesses),
        InitialGuess::Random { seed } => initial_guesses_random(&monic, seed, &mut guesses),
    }

    Ok(durand_kerner(&monic, &mut guesses, config.epsilon, config.max_iter))
}
