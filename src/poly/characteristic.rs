//! Closed-loop characteristic polynomial from open-loop poles and feedback.

use crate::{Error, Poly};

/// One of the three feedback gains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FeedbackSlot {
    /// Feedback into the constant term, `g0`
    #[default]
    Constant,
    /// Feedback into the linear term, `g1`
    Linear,
    /// Feedback into both the constant and the leading term, `g2`
    Ends,
}

impl FeedbackSlot {
    pub const ALL: [Self; 3] = [Self::Constant, Self::Linear, Self::Ends];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Constant => 0,
            Self::Linear => 1,
            Self::Ends => 2,
        }
    }
}

impl TryFrom<usize> for FeedbackSlot {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value)
            .copied()
            .ok_or(Error::InvalidFeedbackSlot(value))
    }
}

/// The three feedback gains `[g0, g1, g2]`.
///
/// A positive gain is positive feedback, so it is *subtracted* from the
/// polynomial.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Feedback(pub [f64; 3]);

impl Feedback {
    #[must_use]
    pub const fn new(g0: f64, g1: f64, g2: f64) -> Self {
        Self([g0, g1, g2])
    }

    #[must_use]
    pub const fn get(&self, slot: FeedbackSlot) -> f64 {
        self.0[slot.index()]
    }

    pub fn set(&mut self, slot: FeedbackSlot, value: f64) {
        self.0[slot.index()] = value;
    }

    /// Subtract the gains from `poly` in-place.
    ///
    /// `g0` always goes into the constant term. `g1` and `g2` need a linear
    /// term to exist and are skipped on constants.
    pub fn apply(&self, poly: &mut Poly) {
        let [g0, g1, g2] = self.0;
        poly[0] -= g0;
        if poly.degree() >= 1 {
            let top = poly.degree();
            poly[1] -= g1;
            poly[0] -= g2;
            poly[top] -= g2;
        }
    }
}

/// Build the closed-loop characteristic polynomial.
///
/// The open-loop poles are folded into `(x - p_0)(x - p_1)...` in the order
/// given, starting from `[1]`, then the feedback is applied.
///
/// # Examples
/// ```
/// use pole_dance::{characteristic_polynomial, poly, Feedback};
///
/// let p = characteristic_polynomial(&[-1.0], &Feedback::new(0.5, 0.0, 0.0));
/// assert_eq!(p, poly![0.5, 1.0]);
/// ```
#[must_use]
pub fn characteristic_polynomial(poles: &[f64], feedback: &Feedback) -> Poly {
    let mut poly = Poly::from_roots(poles);
    feedback.apply(&mut poly);
    poly
}
