//! Continuous-source solution of the advection-dispersion-reaction equation.

use std::f64::consts::LN_2;

use crate::{
    solution::AnalyticalSolution,
    special::{SpecialFunctions, Statrs},
};

/// Response of a semi-infinite column to a unit source switched on at `t = 0`.
///
/// Evaluates
///
/// ```text
/// H(x, t) = ½ exp((v - u) x / 2D) erfc((x - u t) / 2√(D t))
///         + ½ exp((v + u) x / 2D) erfc((x + u t) / 2√(D t))
/// ```
///
/// with `u = v √(1 + 4 k D / v²)`.
///
/// Each term multiplies an exponential that can overflow by an `erfc` that
/// can underflow: the plus term for large `v x / D`, the minus term when a
/// negative `v` meets a positive `k`. Both are summed in log space and
/// exponentiated once.
/// At `t = 0` the source has not acted yet and the result is exactly zero.
/// Negative times and non-positive dispersion are not rejected; they yield
/// NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseSolution<F = Statrs> {
    velocity: f64,
    dispersion: f64,
    reaction_rate: f64,
    special: F,
}

impl BaseSolution {
    /// Creates a solution backed by the default [`Statrs`] error functions.
    #[must_use]
    pub fn new(velocity: f64, dispersion: f64, reaction_rate: f64) -> Self {
        Self::with_special_functions(velocity, dispersion, reaction_rate, Statrs)
    }
}

impl<F: SpecialFunctions> BaseSolution<F> {
    /// Creates a solution that evaluates `erfc` through `special`.
    #[must_use]
    pub fn with_special_functions(
        velocity: f64,
        dispersion: f64,
        reaction_rate: f64,
        special: F,
    ) -> Self {
        Self {
            velocity,
            dispersion,
            reaction_rate,
            special,
        }
    }

    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[must_use]
    pub fn dispersion(&self) -> f64 {
        self.dispersion
    }

    #[must_use]
    pub fn reaction_rate(&self) -> f64 {
        self.reaction_rate
    }

    /// Returns the reaction-adjusted velocity `u`.
    ///
    /// Computed as `√(v² + 4kD)` with the sign of `v`, which equals
    /// `v √(1 + 4kD/v²)` and stays defined when `v = 0`.
    #[must_use]
    pub fn reactive_velocity(&self) -> f64 {
        let Self {
            velocity: v,
            dispersion: d,
            reaction_rate: k,
            ..
        } = *self;

        (v * v + 4.0 * k * d).sqrt().copysign(v)
    }

    /// Returns this solution with every rate divided by `factor`.
    #[must_use]
    pub fn rescaled(&self, factor: f64) -> Self
    where
        F: Clone,
    {
        Self {
            velocity: self.velocity / factor,
            dispersion: self.dispersion / factor,
            reaction_rate: self.reaction_rate / factor,
            special: self.special.clone(),
        }
    }
}

impl<F: SpecialFunctions> AnalyticalSolution for BaseSolution<F> {
    fn concentration_at(&self, x: f64, t: f64) -> f64 {
        if t == 0.0 {
            return 0.0;
        }

        let v = self.velocity;
        let u = self.reactive_velocity();
        let a = 2.0 * (self.dispersion * t).sqrt();
        let b = x / (2.0 * self.dispersion);

        let log_minus_term = -LN_2 + (v - u) * b + self.special.ln_erfc((x - u * t) / a);
        let log_plus_term = -LN_2 + (v + u) * b + self.special.ln_erfc((x + u * t) / a);

        log_minus_term.exp() + log_plus_term.exp()
    }
}
