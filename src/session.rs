//! Interactive editing state: poles, feedback gains and the root traces.
//!
//! A [`Session`] reacts to three events, [`Session::add_pole`],
//! [`Session::set_feedback`] and [`Session::clear`]. Each one runs to
//! completion (rebuild the polynomial, solve, cache, notify) before returning,
//! and reports the outcome to its [`Observer`].

use num::complex::Complex64;

use crate::{
    characteristic_polynomial, compute_response, is_stable,
    roots::{self, SolverConfig},
    Error, Feedback, FeedbackSlot, Poly, ResponseSample, Result, SweepConfig,
};

mod cache;
pub use cache::{CacheKey, RootCache};

/// What changed after an event.
#[derive(Clone, Debug, PartialEq)]
pub struct Update<'a> {
    /// Current closed-loop roots, empty without poles
    pub roots: &'a [Complex64],
    /// Roots previously computed while sweeping the last edited gain
    pub traces: Vec<&'a [Complex64]>,
    pub polynomial: &'a Poly,
}

/// Receives the results of every event, this is where a presentation layer
/// plugs in.
pub trait Observer {
    /// Called after every event that changes the session.
    fn on_update(&mut self, update: &Update<'_>);

    /// Called right after [`Observer::on_update`] with the frequency response,
    /// or `None` when the closed loop is unstable and there is nothing
    /// meaningful to plot.
    fn on_response(&mut self, curve: Option<&[ResponseSample]>) {
        let _ = curve;
    }
}

/// Discards everything.
impl Observer for () {
    fn on_update(&mut self, _update: &Update<'_>) {}
}

/// Poles, feedback and root traces of one interactive session.
#[derive(Debug)]
pub struct Session<O: Observer> {
    poles: Vec<f64>,
    feedback: Feedback,
    last_slot: FeedbackSlot,
    cache: RootCache,
    polynomial: Poly,
    roots: Vec<Complex64>,
    solver: SolverConfig,
    sweep: SweepConfig,
    observer: O,
}

impl<O: Observer> Session<O> {
    pub fn new(observer: O) -> Self {
        Self::with_config(observer, SolverConfig::default(), SweepConfig::default())
    }

    pub fn with_config(observer: O, solver: SolverConfig, sweep: SweepConfig) -> Self {
        Self {
            poles: vec![],
            feedback: Feedback::default(),
            last_slot: FeedbackSlot::default(),
            cache: RootCache::new(),
            polynomial: Poly::one(),
            roots: vec![],
            solver,
            sweep,
            observer,
        }
    }

    /// Place a new real open-loop pole.
    pub fn add_pole(&mut self, position: f64) {
        log::trace!("add pole {position}");
        self.poles.push(position);
        self.update();
    }

    /// Change one feedback gain.
    ///
    /// Switching to a different slot than the previous call starts a new set
    /// of traces.
    pub fn set_feedback(&mut self, slot: FeedbackSlot, value: f64) {
        log::trace!("set feedback {slot:?} = {value}");
        if slot != self.last_slot {
            self.cache.clear();
            self.last_slot = slot;
        }
        self.feedback.set(slot, value);
        self.update();
    }

    /// [`Session::set_feedback`] with a numeric slot.
    ///
    /// # Errors
    /// `InvalidFeedbackSlot` if `index` is not 0, 1 or 2. The session is left
    /// untouched.
    pub fn set_feedback_index(&mut self, index: usize, value: f64) -> Result<()> {
        let slot = FeedbackSlot::try_from(index)?;
        self.set_feedback(slot, value);
        Ok(())
    }

    /// Back to an empty session. Nothing is solved, the observer gets an
    /// empty update and no response.
    pub fn clear(&mut self) {
        log::trace!("clear");
        self.poles.clear();
        self.feedback = Feedback::default();
        self.last_slot = FeedbackSlot::default();
        self.cache.clear();
        self.polynomial = Poly::one();
        self.roots.clear();

        self.observer.on_update(&Update {
            roots: &self.roots,
            traces: vec![],
            polynomial: &self.polynomial,
        });
        self.observer.on_response(None);
    }

    #[must_use]
    pub fn poles(&self) -> &[f64] {
        &self.poles
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    #[must_use]
    pub const fn last_slot(&self) -> FeedbackSlot {
        self.last_slot
    }

    #[must_use]
    pub const fn polynomial(&self) -> &Poly {
        &self.polynomial
    }

    #[must_use]
    pub fn roots(&self) -> &[Complex64] {
        &self.roots
    }

    #[must_use]
    pub const fn cache(&self) -> &RootCache {
        &self.cache
    }

    #[must_use]
    pub const fn solver_config(&self) -> &SolverConfig {
        &self.solver
    }

    #[must_use]
    pub const fn sweep_config(&self) -> &SweepConfig {
        &self.sweep
    }

    #[must_use]
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    fn update(&mut self) {
        self.polynomial = characteristic_polynomial(&self.poles, &self.feedback);
        let solved = self.solve();
        self.roots = solved.clone().unwrap_or_default();

        let key = CacheKey::from_gain(self.feedback.get(self.last_slot));
        self.cache.insert(key, &self.roots);

        self.observer.on_update(&Update {
            roots: &self.roots,
            traces: self.cache.traces().collect(),
            polynomial: &self.polynomial,
        });

        let curve = solved
            .filter(|roots| is_stable(roots))
            .map(|_| compute_response(&self.polynomial, &self.sweep));
        self.observer.on_response(curve.as_deref());
    }

    /// `None` if the polynomial could not be solved, an empty root set for
    /// constants.
    ///
    /// Coefficients cancelled by feedback at the top are dropped first, the
    /// remaining lower degree polynomial has the same finite roots.
    fn solve(&self) -> Option<Vec<Complex64>> {
        if self.polynomial.is_zero() {
            log::warn!("feedback cancelled every coefficient of the polynomial");
            return None;
        }
        let trimmed = self.polynomial.trim_zeros();
        if trimmed.degree() < self.polynomial.degree() {
            log::debug!("leading coefficients cancelled, solving {trimmed}");
        }
        match roots::solve(&trimmed, &self.solver) {
            Ok(solution) if solution.converged => Some(solution.roots),
            Ok(solution) if solution.max_correction.is_finite() => {
                log::debug!(
                    "roots of {trimmed} did not converge, max correction {:e}",
                    solution.max_correction
                );
                Some(solution.roots)
            }
            Ok(_) => {
                log::warn!("roots of {trimmed} diverged");
                None
            }
            Err(Error::DegreeTooLow) => Some(vec![]),
            Err(e) => {
                log::warn!("cannot solve {trimmed}: {e}");
                None
            }
        }
    }
}
