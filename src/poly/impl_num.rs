use std::ops::Mul;

use crate::Poly;

/// Full discrete convolution, `out[i + j] += a[i] * b[j]`.
///
/// Empty inputs yield an empty output.
pub(crate) fn convolve(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return vec![];
    }
    let mut out = vec![0.0; a.len() + b.len() - 1];
    for (i, x) in a.iter().enumerate() {
        for (j, y) in b.iter().enumerate() {
            out[i + j] += x * y;
        }
    }
    out
}

impl Mul<Self> for Poly {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<&Self> for Poly {
    type Output = Self;

    fn mul(self, rhs: &Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Mul<Poly> for &Poly {
    type Output = Poly;

    fn mul(self, rhs: Poly) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<&Poly> for &Poly {
    type Output = Poly;

    fn mul(self, rhs: &Poly) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Mul<f64> for Poly {
    type Output = Self;

    fn mul(mut self, rhs: f64) -> Self::Output {
        self.0.iter_mut().for_each(|c| *c *= rhs);
        self
    }
}

#[cfg(test)]
mod test {
    use super::convolve;
    use crate::Poly;

    #[test]
    fn convolve_lengths() {
        assert_eq!(convolve(&[1.0, 2.0], &[3.0, 4.0, 5.0]).len(), 4);
        assert!(convolve(&[], &[1.0]).is_empty());
    }

    #[test]
    fn identity() {
        let p = poly![0.5, -1.5, 2.0, 7.0];
        assert_eq!(Poly::one() * p.clone(), p);
        assert_eq!(p.clone() * Poly::one(), p);
    }

    #[test]
    fn commutative() {
        let p1 = poly![1.0, -2.0, 0.25];
        let p2 = poly![3.0, 0.5, 0.0, 1.0];
        let a = &p1 * &p2;
        let b = &p2 * &p1;
        assert_eq!(a, b);
        assert_eq!(a.len(), p1.len() + p2.len() - 1);
    }

    #[test]
    fn keeps_zero_leading() {
        let p = poly![1.0, 0.0] * poly![1.0, 1.0];
        assert_eq!(p, poly![1.0, 1.0, 0.0]);
    }

    #[test]
    fn scale() {
        assert_eq!(poly![1.0, 2.0] * 2.0, poly![2.0, 4.0]);
    }
}
