use thiserror::Error;

/// The top-level error type for this crate.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A feedback slot index outside of `{0, 1, 2}`, this is a bug in the caller
    #[error("feedback slot {0} does not exist, valid slots are 0, 1 and 2")]
    InvalidFeedbackSlot(usize),

    /// Constant polynomials have no roots to look for
    #[error("cannot find roots of a polynomial of degree 0")]
    DegreeTooLow,

    /// Feedback cancelled the highest power, the degree is ill-defined
    #[error("leading coefficient is zero, cannot make the polynomial monic")]
    ZeroLeadingCoefficient,
}

pub type Result<T> = std::result::Result<T, Error>;
