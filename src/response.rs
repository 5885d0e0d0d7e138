//! Magnitude response of `1 / P(s)` along the imaginary axis.
//!
//! The sweep is logarithmic: `octaves * samples_per_octave + 1` points from
//! `2^(-octaves/2)` to `2^(octaves/2)`, i.e. evenly spaced in octaves around
//! a centre frequency of 1.

use num::complex::Complex64;

use crate::{util::casting::usize_to_f64, Poly};

/// Optional scaling of the curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Plain `1 / |P(jw)|^2`
    #[default]
    None,
    /// Divide by the DC gain so the curve starts at 0 dB. Ignored when the
    /// constant term is zero.
    DcGain,
}

/// Shape of the frequency sweep and of the vertical axis it is plotted on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepConfig {
    /// Total width of the sweep, centred on `w = 1`
    pub octaves: u32,
    /// Zero is read as 1
    pub samples_per_octave: u32,
    /// Floor of the curve, lower levels are clamped to it
    pub db_min: f64,
    /// Top of the plotting axis
    pub db_max: f64,
    pub normalization: Normalization,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            octaves: 6,
            samples_per_octave: 40,
            db_min: -60.0,
            db_max: 20.0,
            normalization: Normalization::None,
        }
    }
}

impl SweepConfig {
    /// Number of samples in a sweep
    #[must_use]
    pub const fn len(&self) -> usize {
        (self.octaves as usize)
            .saturating_mul(self.samples_per_octave() as usize)
            .saturating_add(1)
    }

    const fn samples_per_octave(&self) -> u32 {
        if self.samples_per_octave == 0 {
            1
        } else {
            self.samples_per_octave
        }
    }

    /// A sweep always holds at least the centre sample.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Octave offset of sample `x`, zero at the centre.
    #[must_use]
    pub fn octave(&self, x: usize) -> f64 {
        usize_to_f64(x) / f64::from(self.samples_per_octave()) - f64::from(self.octaves) / 2.0
    }

    /// `(octave, w)` for every sample, in order.
    pub fn frequencies(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        (0..self.len()).map(|x| {
            let octave = self.octave(x);
            (octave, octave.exp2())
        })
    }

    /// Distance in dB from the top of the axis, what a plot maps to a
    /// vertical coordinate.
    #[must_use]
    pub fn axis_offset(&self, db: f64) -> f64 {
        self.db_max - db
    }

    /// Largest `|P(jw)|^2` that is still shown, corresponds to `db_min`.
    ///
    /// Never below `f64::MIN_POSITIVE`, so a NaN or huge `db_min` pins every
    /// level to the top of the range instead of failing the clamp.
    fn power_ceiling(&self) -> f64 {
        10_f64.powf(-self.db_min / 10.0).max(f64::MIN_POSITIVE)
    }

    /// Level in dB of `1 / power`, clamped so it never goes below `db_min`
    /// and never reaches infinity.
    fn level(&self, poly: &Poly, power: f64) -> f64 {
        let power = match self.normalization {
            Normalization::DcGain if poly[0] != 0.0 => power / (poly[0] * poly[0]),
            _ => power,
        };
        -10.0 * power.clamp(f64::MIN_POSITIVE, self.power_ceiling()).log10()
    }
}

/// One point of a frequency response curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResponseSample {
    /// log2 of the frequency
    pub octave: f64,
    pub magnitude_db: f64,
}

/// Compute the magnitude response of `1 / poly(s)` over the sweep.
///
/// `poly` is evaluated at `s = jw` without complex arithmetic: since `j^k`
/// cycles through `1, j, -1, -j`, the terms `c_k w^k` are summed into four
/// buckets by `k mod 4` and `|P(jw)|^2 = (b0 - b2)^2 + (b1 - b3)^2`.
///
/// This is a pure function of the polynomial, it does not care whether the
/// system is stable.
///
/// # Examples
/// ```
/// use pole_dance::{compute_response, poly, SweepConfig};
///
/// let sweep = SweepConfig::default();
/// let curve = compute_response(&poly![1.0, 1.0], &sweep);
/// assert_eq!(curve.len(), 241);
/// // single pole at -1 is 3 dB down at w = 1
/// assert!((curve[120].magnitude_db + 3.0103).abs() < 1E-4);
/// ```
#[must_use]
pub fn compute_response(poly: &Poly, sweep: &SweepConfig) -> Vec<ResponseSample> {
    sweep
        .frequencies()
        .map(|(octave, w)| ResponseSample {
            octave,
            magnitude_db: sweep.level(poly, power_at_jw(poly, w)),
        })
        .collect()
}

/// Same curve as [`compute_response`], evaluating `P(jw)` directly with
/// complex arithmetic.
#[must_use]
pub fn compute_response_direct(poly: &Poly, sweep: &SweepConfig) -> Vec<ResponseSample> {
    sweep
        .frequencies()
        .map(|(octave, w)| ResponseSample {
            octave,
            magnitude_db: sweep.level(poly, poly.eval(Complex64::new(0.0, w)).norm_sqr()),
        })
        .collect()
}

/// `|P(jw)|^2` by phase buckets.
fn power_at_jw(poly: &Poly, w: f64) -> f64 {
    let mut sums = [0.0; 4];
    let mut w_pow = 1.0;
    for (i, c) in poly.iter().enumerate() {
        sums[i % 4] += c * w_pow;
        w_pow *= w;
    }
    let re = sums[0] - sums[2];
    let im = sums[1] - sums[3];
    re.mul_add(re, im * im)
}

/// True if every root is in the closed left half-plane.
///
/// An empty set of roots is stable.
#[must_use]
pub fn is_stable(roots: &[Complex64]) -> bool {
    roots.iter().all(|r| r.re <= 0.0)
}

#[cfg(test)]
mod test {
    use num::complex::Complex64;

    use super::{compute_response, is_stable, power_at_jw, Normalization, SweepConfig};

    #[test]
    fn sweep_shape() {
        let sweep = SweepConfig {
            octaves: 4,
            samples_per_octave: 3,
            ..SweepConfig::default()
        };
        let f = sweep.frequencies().collect::<Vec<_>>();
        assert_eq!(f.len(), 13);
        assert_eq!(f[0], (-2.0, 0.25));
        assert_eq!(f[6], (0.0, 1.0));
        assert_eq!(f[12], (2.0, 4.0));
    }

    #[test]
    fn buckets() {
        // P(s) = 1 + 2s + 3s^2 + 4s^3 + 5s^4, P(j) = (1 - 3 + 5) + j(2 - 4)
        let p = poly![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(power_at_jw(&p, 1.0), 13.0);
    }

    #[test]
    fn constant_is_flat() {
        let curve = compute_response(&poly![1.0], &SweepConfig::default());
        assert!(curve.iter().all(|s| s.magnitude_db == 0.0));
    }

    #[test]
    fn clamped_to_db_min() {
        let sweep = SweepConfig::default();
        let curve = compute_response(&poly![1E6], &sweep);
        assert!(curve
            .iter()
            .all(|s| (s.magnitude_db - sweep.db_min).abs() < 1E-9));
    }

    #[test]
    fn zero_poly_is_finite() {
        let curve = compute_response(&poly![0.0, 0.0], &SweepConfig::default());
        assert!(curve.iter().all(|s| s.magnitude_db.is_finite()));
    }

    #[test]
    fn dc_gain_normalization() {
        let sweep = SweepConfig {
            normalization: Normalization::DcGain,
            ..SweepConfig::default()
        };
        // 1 / (s + 4), DC gain of -12 dB without normalization
        let curve = compute_response(&poly![4.0, 1.0], &sweep);
        assert!(curve[0].magnitude_db.abs() < 0.01);
        let plain = compute_response(&poly![4.0, 1.0], &SweepConfig::default());
        assert!((plain[0].magnitude_db + 12.04).abs() < 0.01);
    }

    #[test]
    fn zero_samples_per_octave() {
        let sweep = SweepConfig {
            samples_per_octave: 0,
            ..SweepConfig::default()
        };
        assert_eq!(sweep.len(), 7);
        let curve = compute_response(&poly![1.0, 1.0], &sweep);
        assert_eq!(curve.len(), 7);
        assert_eq!(curve[0].octave, -3.0);
        assert!(curve.iter().all(|s| s.magnitude_db.is_finite()));
    }

    #[test]
    fn huge_sweep_len_saturates() {
        let sweep = SweepConfig {
            octaves: u32::MAX,
            samples_per_octave: u32::MAX,
            ..SweepConfig::default()
        };
        assert!(sweep.len() >= u32::MAX as usize);
    }

    #[test]
    fn degenerate_floor() {
        for db_min in [3100.0, f64::INFINITY, f64::NAN] {
            let sweep = SweepConfig {
                db_min,
                ..SweepConfig::default()
            };
            let curve = compute_response(&poly![2.0, 1.0], &sweep);
            assert!(
                curve.iter().all(|s| s.magnitude_db.is_finite()),
                "db_min = {db_min}"
            );
        }
        let sweep = SweepConfig {
            db_min: f64::NEG_INFINITY,
            ..SweepConfig::default()
        };
        let curve = compute_response(&poly![1E100], &sweep);
        assert!(curve.iter().all(|s| (s.magnitude_db + 2000.0).abs() < 1E-6));
    }

    #[test]
    fn axis_offset() {
        let sweep = SweepConfig::default();
        assert_eq!(sweep.axis_offset(20.0), 0.0);
        assert_eq!(sweep.axis_offset(-60.0), 80.0);
    }

    #[test]
    fn stability() {
        assert!(is_stable(&[]));
        assert!(is_stable(&[Complex64::new(-1.0, 2.0), Complex64::new(0.0, 1.0)]));
        assert!(!is_stable(&[Complex64::new(-1.0, 0.0), Complex64::new(1.0, 0.0)]));
    }
}
