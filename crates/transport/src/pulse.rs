//! Finite-duration source by superposition.

use crate::{
    base::BaseSolution,
    solution::AnalyticalSolution,
    special::{SpecialFunctions, Statrs},
};

/// A source held on for `0 ≤ t ≤ T` and flushed with clean fluid afterwards.
///
/// The governing equation is linear, so the pulse is the continuous source
/// minus a copy of itself delayed by `T`:
///
/// ```text
/// C(x, t) = H(x, t) - H(x, max(t - T, 0))
/// ```
///
/// While `t ≤ T` the delayed copy sits at `t = 0`, where [`BaseSolution`] is
/// exactly zero. A zero duration gives a source that never acts, and an
/// infinite duration gives the plain step response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseSolution<F = Statrs> {
    base: BaseSolution<F>,
    duration: f64,
}

impl PulseSolution {
    /// Creates a pulse of `duration` with the default error functions.
    #[must_use]
    pub fn new(velocity: f64, dispersion: f64, reaction_rate: f64, duration: f64) -> Self {
        Self::from_base(BaseSolution::new(velocity, dispersion, reaction_rate), duration)
    }
}

impl<F: SpecialFunctions> PulseSolution<F> {
    /// Switches `base` off after `duration`.
    #[must_use]
    pub fn from_base(base: BaseSolution<F>, duration: f64) -> Self {
        Self { base, duration }
    }

    #[must_use]
    pub fn base(&self) -> &BaseSolution<F> {
        &self.base
    }

    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Returns this pulse with every rate divided by `factor`.
    ///
    /// The duration is a time and is left unchanged.
    #[must_use]
    pub fn rescaled(&self, factor: f64) -> Self
    where
        F: Clone,
    {
        Self {
            base: self.base.rescaled(factor),
            duration: self.duration,
        }
    }
}

impl<F: SpecialFunctions> AnalyticalSolution for PulseSolution<F> {
    fn concentration_at(&self, x: f64, t: f64) -> f64 {
        let shifted = (t - self.duration).max(0.0);
        self.base.concentration_at(x, t) - self.base.concentration_at(x, shifted)
    }
}
