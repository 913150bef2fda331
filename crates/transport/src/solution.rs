//! The evaluation contract shared by every solution, and the entry points
//! that apply a boundary concentration.

use ndarray::{ArrayBase, ArrayD, Data, Dimension};
use solute_core::{Model, Snapshot};
use tracing::debug;

use crate::{
    EvaluationError, broadcast::zip_with, pulse::PulseSolution, retardation::RetardedSolution,
};

/// A closed-form concentration field `C(x, t)`.
///
/// Implementors only provide the scalar kernel. Array evaluation broadcasts
/// `x` against `t` and fills the whole grid in one call.
pub trait AnalyticalSolution {
    /// Evaluates the solution at a single point.
    fn concentration_at(&self, x: f64, t: f64) -> f64;

    /// Evaluates the solution over broadcast coordinate arrays.
    ///
    /// Points outside the physical domain come back as NaN rather than
    /// failing the call.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::Broadcast`] if `x` and `t` have
    /// incompatible shapes.
    fn concentration<Sx, Dx, St, Dt>(
        &self,
        x: &ArrayBase<Sx, Dx>,
        t: &ArrayBase<St, Dt>,
    ) -> Result<ArrayD<f64>, EvaluationError>
    where
        Sx: Data<Elem = f64>,
        Dx: Dimension,
        St: Data<Elem = f64>,
        Dt: Dimension,
    {
        zip_with(x, t, |x, t| self.concentration_at(x, t))
    }
}

/// A normalized solution scaled to an actual boundary concentration.
///
/// The kernels are normalized to a unit source; this wrapper multiplies the
/// result by `boundary`, so doubling the boundary concentration doubles the
/// field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Concentration<S> {
    solution: S,
    boundary: f64,
}

impl<S: AnalyticalSolution> Concentration<S> {
    #[must_use]
    pub fn new(solution: S, boundary: f64) -> Self {
        Self { solution, boundary }
    }

    #[must_use]
    pub fn solution(&self) -> &S {
        &self.solution
    }

    #[must_use]
    pub fn boundary(&self) -> f64 {
        self.boundary
    }
}

impl<S: AnalyticalSolution> AnalyticalSolution for Concentration<S> {
    fn concentration_at(&self, x: f64, t: f64) -> f64 {
        self.boundary * self.solution.concentration_at(x, t)
    }
}

/// Spatial and temporal coordinates for a [`Model`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates {
    pub x: ArrayD<f64>,
    pub t: ArrayD<f64>,
}

impl Coordinates {
    /// Creates coordinates from arrays of any dimensionality.
    #[must_use]
    pub fn new<Dx: Dimension, Dt: Dimension>(
        x: ndarray::Array<f64, Dx>,
        t: ndarray::Array<f64, Dt>,
    ) -> Self {
        Self {
            x: x.into_dyn(),
            t: t.into_dyn(),
        }
    }
}

impl<S: AnalyticalSolution> Model for Concentration<S> {
    type Input = Coordinates;
    type Output = ArrayD<f64>;
    type Error = EvaluationError;

    fn call(&self, input: &Coordinates) -> Result<ArrayD<f64>, EvaluationError> {
        self.concentration(&input.x, &input.t)
    }
}

impl<S: AnalyticalSolution> Concentration<S> {
    /// Evaluates the field and keeps it together with its coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::Broadcast`] if the coordinates have
    /// incompatible shapes.
    pub fn snapshot(
        &self,
        coordinates: Coordinates,
    ) -> Result<Snapshot<Coordinates, ArrayD<f64>>, EvaluationError> {
        let output = self.call(&coordinates)?;
        Ok(Snapshot::new(coordinates, output))
    }
}

/// Evaluates a finite pulse without sorption.
///
/// # Errors
///
/// Returns [`EvaluationError::Broadcast`] if `x` and `t` have incompatible
/// shapes. Physically invalid parameters produce NaN instead of an error.
pub fn evaluate_pulse_solution<Sx, Dx, St, Dt>(
    x: &ArrayBase<Sx, Dx>,
    t: &ArrayBase<St, Dt>,
    c_boundary: f64,
    velocity: f64,
    dispersion: f64,
    reaction_rate: f64,
    duration: f64,
) -> Result<ArrayD<f64>, EvaluationError>
where
    Sx: Data<Elem = f64>,
    Dx: Dimension,
    St: Data<Elem = f64>,
    Dt: Dimension,
{
    debug!(
        x_shape = ?x.shape(),
        t_shape = ?t.shape(),
        c_boundary,
        velocity,
        dispersion,
        reaction_rate,
        duration,
        "evaluating pulse solution"
    );

    let pulse = PulseSolution::new(velocity, dispersion, reaction_rate, duration);
    Concentration::new(pulse, c_boundary).concentration(x, t)
}

/// Evaluates a finite pulse with linear equilibrium sorption.
///
/// # Errors
///
/// Returns [`EvaluationError::Broadcast`] if `x` and `t` have incompatible
/// shapes. Physically invalid parameters produce NaN instead of an error.
#[allow(clippy::too_many_arguments)]
pub fn evaluate_retarded_solution<Sx, Dx, St, Dt>(
    x: &ArrayBase<Sx, Dx>,
    t: &ArrayBase<St, Dt>,
    c_boundary: f64,
    velocity: f64,
    dispersion: f64,
    reaction_rate: f64,
    duration: f64,
    retardation: f64,
) -> Result<ArrayD<f64>, EvaluationError>
where
    Sx: Data<Elem = f64>,
    Dx: Dimension,
    St: Data<Elem = f64>,
    Dt: Dimension,
{
    debug!(
        x_shape = ?x.shape(),
        t_shape = ?t.shape(),
        c_boundary,
        velocity,
        dispersion,
        reaction_rate,
        duration,
        retardation,
        "evaluating retarded solution"
    );

    let retarded =
        RetardedSolution::new(velocity, dispersion, reaction_rate, duration, retardation);
    Concentration::new(retarded, c_boundary).concentration(x, t)
}
