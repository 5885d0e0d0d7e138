#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

//! Root locus and frequency response of real polynomials under linear feedback.
//!
//! A [`Session`] holds a set of real open-loop poles and three feedback gains.
//! Every edit rebuilds the characteristic polynomial, solves it with the
//! Durand-Kerner method and, when the closed loop is stable, sweeps its
//! magnitude response over a few octaves. The results are pushed to an
//! [`Observer`], which is where a presentation layer plugs in.
//!
//! ```
//! use pole_dance::{poly, roots::find_roots};
//!
//! // s^2 + 3s + 2 = (s + 1)(s + 2)
//! let p = poly![2.0, 3.0, 1.0];
//! let mut roots = find_roots(&p).unwrap();
//! roots.sort_by(|a, b| a.re.total_cmp(&b.re));
//! assert!((roots[0].re + 2.0).abs() < 1E-6);
//! assert!((roots[1].re + 1.0).abs() < 1E-6);
//! ```

pub use num;

/// Build a [`Poly`] from real coefficients, constant term first.
///
/// ```
/// use pole_dance::{poly, Poly};
///
/// assert_eq!(poly![2.0, 3.0, 1.0], Poly::new(vec![2.0, 3.0, 1.0]));
/// ```
#[macro_export]
macro_rules! poly {
    () => {
        $crate::Poly::one()
    };
    ($($c:expr),+ $(,)?) => {
        $crate::Poly::new(vec![$($c),+])
    };
}

mod error;
pub use error::{Error, Result};

mod poly;
pub use poly::characteristic::{characteristic_polynomial, Feedback, FeedbackSlot};
pub use poly::Poly;

pub mod response;
pub use response::{compute_response, is_stable, Normalization, ResponseSample, SweepConfig};

pub mod roots;
pub use roots::{SolverConfig, Solution};

pub mod session;
pub use session::{Observer, Session, Update};

mod util;

#[doc(hidden)]
pub use util::__testing;

/// Root of a polynomial, as a complex number.
pub type Root = num::complex::Complex64;
