//! Macros for reducing doc comment boilerplate.

/// Documents the errors of root finders on degenerate polynomials.
macro_rules! errors_degenerate {
    () => {
        r"- `DegreeTooLow`: the polynomial is a constant, there is nothing to solve.
- `ZeroLeadingCoefficient`: the highest stored coefficient is zero, usually because feedback cancelled it.

Running out of iterations is *not* an error, check [`Solution::converged`](crate::Solution::converged) instead.
"
    };
}
pub(crate) use errors_degenerate;
