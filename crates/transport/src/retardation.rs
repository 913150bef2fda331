//! Linear equilibrium sorption.

use crate::{
    pulse::PulseSolution,
    solution::AnalyticalSolution,
    special::{SpecialFunctions, Statrs},
};

/// A pulse solution slowed by linear, instantaneous, reversible sorption.
///
/// Sorption with retardation factor `R` is equivalent to dividing the
/// velocity, dispersion, and reaction rate by `R`. The rescaling happens once
/// at construction; evaluation then delegates to the rescaled pulse. With
/// `R = 1` the rescaled rates are bit-for-bit the originals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetardedSolution<F = Statrs> {
    retardation: f64,
    retarded: PulseSolution<F>,
}

impl RetardedSolution {
    /// Creates a retarded pulse with the default error functions.
    #[must_use]
    pub fn new(
        velocity: f64,
        dispersion: f64,
        reaction_rate: f64,
        duration: f64,
        retardation: f64,
    ) -> Self {
        Self::from_pulse(
            &PulseSolution::new(velocity, dispersion, reaction_rate, duration),
            retardation,
        )
    }
}

impl<F: SpecialFunctions + Clone> RetardedSolution<F> {
    /// Applies a retardation factor to an unretarded pulse.
    #[must_use]
    pub fn from_pulse(pulse: &PulseSolution<F>, retardation: f64) -> Self {
        Self {
            retardation,
            retarded: pulse.rescaled(retardation),
        }
    }
}

impl<F: SpecialFunctions> RetardedSolution<F> {
    #[must_use]
    pub fn retardation(&self) -> f64 {
        self.retardation
    }

    /// Returns the pulse with the rescaled rates that is actually evaluated.
    #[must_use]
    pub fn retarded_pulse(&self) -> &PulseSolution<F> {
        &self.retarded
    }
}

impl<F: SpecialFunctions> AnalyticalSolution for RetardedSolution<F> {
    fn concentration_at(&self, x: f64, t: f64) -> f64 {
        self.retarded.concentration_at(x, t)
    }
}
