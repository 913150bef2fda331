//! Physical parameters and their optional domain checks.

use serde::{Deserialize, Serialize};
use solute_core::constraint::{
    AtLeastOne, Constrained, Constraint, ConstraintError, Finite, NonNegative, StrictlyPositive,
};

use crate::{
    ParameterError, pulse::PulseSolution, retardation::RetardedSolution, solution::Concentration,
};

/// The scalar inputs of a transport solution.
///
/// Values are taken as given: the kernels evaluate anything and let invalid
/// inputs surface as NaN. Call [`TransportParameters::validate`] to check the
/// physical domain up front.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportParameters {
    pub boundary_concentration: f64,
    pub velocity: f64,
    pub dispersion: f64,
    pub reaction_rate: f64,
    pub pulse_duration: f64,
    pub retardation: f64,
}

impl Default for TransportParameters {
    fn default() -> Self {
        Self {
            boundary_concentration: 1.0,
            velocity: 10.0,
            dispersion: 3.0,
            reaction_rate: 0.0,
            pulse_duration: 20.0,
            retardation: 1.0,
        }
    }
}

impl TransportParameters {
    /// Builds the pulse solution without sorption.
    #[must_use]
    pub fn pulse_solution(&self) -> Concentration<PulseSolution> {
        Concentration::new(
            PulseSolution::new(
                self.velocity,
                self.dispersion,
                self.reaction_rate,
                self.pulse_duration,
            ),
            self.boundary_concentration,
        )
    }

    /// Builds the pulse solution with linear equilibrium sorption.
    #[must_use]
    pub fn retarded_solution(&self) -> Concentration<RetardedSolution> {
        Concentration::new(
            RetardedSolution::new(
                self.velocity,
                self.dispersion,
                self.reaction_rate,
                self.pulse_duration,
                self.retardation,
            ),
            self.boundary_concentration,
        )
    }

    /// Checks every parameter against its physical domain.
    ///
    /// Every value must be finite except the pulse duration, where infinity
    /// describes a source that never switches off.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParameterError`] found, in field order.
    pub fn validate(&self) -> Result<ValidatedParameters, ParameterError> {
        Ok(ValidatedParameters {
            boundary_concentration: finite_and(self.boundary_concentration)
                .map_err(ParameterError::BoundaryConcentration)?,
            velocity: Finite::new(self.velocity).map_err(ParameterError::Velocity)?,
            dispersion: finite_and(self.dispersion).map_err(ParameterError::Dispersion)?,
            reaction_rate: finite_and(self.reaction_rate).map_err(ParameterError::ReactionRate)?,
            pulse_duration: NonNegative::new(self.pulse_duration)
                .map_err(ParameterError::PulseDuration)?,
            retardation: finite_and(self.retardation).map_err(ParameterError::Retardation)?,
        })
    }
}

/// Applies `C` to a value that must also be finite.
fn finite_and<C: Constraint<f64>>(value: f64) -> Result<Constrained<f64, C>, ConstraintError> {
    Finite::new(value)?;
    Constrained::new(value)
}

/// Transport parameters known to lie in their physical domain.
///
/// Solutions built from these never produce NaN for finite `x ≥ 0` and
/// `t ≥ 0`, short of `x / D` itself overflowing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedParameters {
    boundary_concentration: Constrained<f64, NonNegative>,
    velocity: Constrained<f64, Finite>,
    dispersion: Constrained<f64, StrictlyPositive>,
    reaction_rate: Constrained<f64, NonNegative>,
    pulse_duration: Constrained<f64, NonNegative>,
    retardation: Constrained<f64, AtLeastOne>,
}

impl ValidatedParameters {
    #[must_use]
    pub fn boundary_concentration(&self) -> f64 {
        self.boundary_concentration.get()
    }

    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity.get()
    }

    #[must_use]
    pub fn dispersion(&self) -> f64 {
        self.dispersion.get()
    }

    #[must_use]
    pub fn reaction_rate(&self) -> f64 {
        self.reaction_rate.get()
    }

    #[must_use]
    pub fn pulse_duration(&self) -> f64 {
        self.pulse_duration.get()
    }

    #[must_use]
    pub fn retardation(&self) -> f64 {
        self.retardation.get()
    }

    /// Builds the retarded pulse solution these parameters describe.
    #[must_use]
    pub fn solution(&self) -> Concentration<RetardedSolution> {
        TransportParameters::from(*self).retarded_solution()
    }
}

impl From<ValidatedParameters> for TransportParameters {
    fn from(params: ValidatedParameters) -> Self {
        Self {
            boundary_concentration: params.boundary_concentration(),
            velocity: params.velocity(),
            dispersion: params.dispersion(),
            reaction_rate: params.reaction_rate(),
            pulse_duration: params.pulse_duration(),
            retardation: params.retardation(),
        }
    }
}
