use std::fmt::Display;

use itertools::Itertools;
use num::{complex::Complex64, One, Zero};

pub(crate) mod characteristic;
mod impl_num;
mod indexing;

/// Real polynomial, coefficients in order of increasing power.
///
/// `self.0[0]` is the constant term. There is always at least one coefficient,
/// and nothing is trimmed implicitly: a zero leading coefficient stays where
/// it is, so the length always reads as "degree + 1" of the expression that
/// built it. See [`Poly::trim_zeros`].
#[derive(Clone, Debug, PartialEq)]
pub struct Poly(pub(crate) Vec<f64>);

impl Poly {
    /// Create a polynomial from real coefficients, constant term first.
    ///
    /// An empty vector is read as the zero polynomial `[0.0]`.
    #[must_use]
    pub fn new(coeffs: Vec<f64>) -> Self {
        if coeffs.is_empty() {
            return Self::zero();
        }
        Self(coeffs)
    }

    /// The constant polynomial `1`, identity of [`Poly::multiply`].
    #[must_use]
    pub fn one() -> Self {
        Self(vec![1.0])
    }

    /// The constant polynomial `0`.
    #[must_use]
    pub fn zero() -> Self {
        Self(vec![0.0])
    }

    /// Monic polynomial from its real roots.
    ///
    /// Factors are multiplied in the order given, starting from `[1]`, so the
    /// result is reproducible bit-for-bit for the same sequence.
    ///
    /// # Examples
    /// ```
    /// use pole_dance::{poly, Poly};
    ///
    /// assert_eq!(Poly::from_roots(&[-1.0, -2.0]), poly![2.0, 3.0, 1.0]);
    /// ```
    #[must_use]
    pub fn from_roots(roots: &[f64]) -> Self {
        roots
            .iter()
            .fold(Self::one(), |acc, &r| Self(vec![-r, 1.0]).multiply(&acc))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        self.0.as_slice()
    }

    /// Iterate over coefficients, from the least significant
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.0.clone()
    }

    /// Number of coefficients, `degree + 1`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false, a polynomial has at least a constant term. Here for
    /// clippy's sake.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index of the highest stored coefficient.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.len() - 1
    }

    /// The highest stored coefficient
    #[must_use]
    pub fn last(&self) -> f64 {
        self.0[self.degree()]
    }

    #[must_use]
    pub fn is_monic(&self) -> bool {
        self.last().is_one()
    }

    /// Make the polynomial monic in-place.
    ///
    /// The roots are preserved. Nothing happens if the leading coefficient is
    /// zero, check for that first.
    pub fn make_monic(&mut self) {
        let last = self.last();
        if last.is_one() || last.is_zero() {
            return;
        }
        self.0.iter_mut().for_each(|c| *c /= last);
    }

    /// Copy without the zero coefficients at the top. The constant term is
    /// always kept, so the zero polynomial trims to `[0]`.
    ///
    /// ```
    /// use pole_dance::poly;
    ///
    /// assert_eq!(poly![1.0, 3.0, 0.0].trim_zeros(), poly![1.0, 3.0]);
    /// ```
    #[must_use]
    pub fn trim_zeros(&self) -> Self {
        let len = self.0.iter().rposition(|c| !c.is_zero()).map_or(1, |i| i + 1);
        Self(self.0[..len].to_vec())
    }

    /// True if every coefficient is zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(Zero::is_zero)
    }

    /// Evaluate at a complex point with Horner's method.
    ///
    /// ```
    /// use pole_dance::poly;
    /// use num::complex::Complex64;
    ///
    /// // s^2 + 1 vanishes at s = i
    /// let p = poly![1.0, 0.0, 1.0];
    /// assert_eq!(p.eval(Complex64::i()), Complex64::new(0.0, 0.0));
    /// ```
    #[must_use]
    pub fn eval(&self, x: Complex64) -> Complex64 {
        self.0
            .iter()
            .rev()
            .fold(Complex64::zero(), |acc, &c| acc * x + c)
    }

    /// Evaluate at a real point with Horner's method.
    #[must_use]
    pub fn eval_real(&self, x: f64) -> f64 {
        self.0.iter().rev().fold(0.0, |acc, &c| acc.mul_add(x, c))
    }

    /// Multiply two polynomials by convolving their coefficients.
    ///
    /// The result has `self.len() + rhs.len() - 1` coefficients. Nothing is
    /// normalized, the leading coefficient is whatever the product gives.
    ///
    /// ```
    /// use pole_dance::poly;
    ///
    /// assert_eq!(poly![1.0, 1.0].multiply(&poly![2.0, 1.0]), poly![2.0, 3.0, 1.0]);
    /// ```
    #[must_use]
    pub fn multiply(&self, rhs: &Self) -> Self {
        Self(impl_num::convolve(&self.0, &rhs.0))
    }

    /// Roots of the polynomial with the default solver settings.
    ///
    /// # Errors
    /// See [`crate::roots::find_roots`].
    pub fn roots(&self) -> crate::Result<Vec<Complex64>> {
        crate::roots::find_roots(self)
    }
}

impl From<Vec<f64>> for Poly {
    fn from(value: Vec<f64>) -> Self {
        Self::new(value)
    }
}

impl From<&[f64]> for Poly {
    fn from(value: &[f64]) -> Self {
        Self::new(value.to_vec())
    }
}

/// Prints descending powers of `s` with two decimals, e.g.
/// `1.00s^2 + 3.00s + 2.00`.
impl Display for Poly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let terms = self
            .0
            .iter()
            .enumerate()
            .rev()
            .map(|(i, c)| match i {
                0 => format!("{c:.2}"),
                1 => format!("{c:.2}s"),
                _ => format!("{c:.2}s^{i}"),
            })
            .join(" + ");
        write!(f, "{terms}")
    }
}
