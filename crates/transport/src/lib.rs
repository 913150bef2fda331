//! Closed-form solutions of the one-dimensional advection-dispersion-reaction
//! equation in a semi-infinite column.
//!
//! The solutions are layered, each built on the one below:
//!
//! - [`BaseSolution`] — continuous source switched on at `t = 0`
//! - [`PulseSolution`] — source switched off again after a duration `T`
//! - [`RetardedSolution`] — pulse slowed by linear equilibrium sorption
//!
//! All of them implement [`AnalyticalSolution`], which evaluates a single
//! point or a whole broadcast grid of `x` and `t`. Results are normalized to
//! a unit boundary concentration; [`Concentration`] scales them.
//!
//! # Example
//!
//! ```
//! use ndarray::{arr0, array};
//! use solute_transport::evaluate_retarded_solution;
//!
//! let x = array![0.0, 50.0, 100.0, 150.0];
//! let c = evaluate_retarded_solution(&x, &arr0(10.0), 1.0, 10.0, 3.0, 0.0, 20.0, 1.0)?;
//!
//! assert_eq!(c.shape(), &[4]);
//! assert!(c.iter().all(|c| c.is_finite()));
//! # Ok::<(), solute_transport::EvaluationError>(())
//! ```
//!
//! Invalid physical inputs (negative time, non-positive dispersion) are not
//! rejected by the kernels. They show up as NaN in the output, so a sweep over
//! a parameter space never stops on a single bad point. Use
//! [`TransportParameters::validate`] for an up-front check.

mod error;

pub mod base;
pub mod broadcast;
pub mod field;
pub mod params;
pub mod pulse;
pub mod retardation;
pub mod solution;
pub mod special;
pub mod view;

pub use base::BaseSolution;
pub use error::{ConfigError, EvaluationError, ParameterError};
pub use field::ConcentrationField;
pub use params::{TransportParameters, ValidatedParameters};
pub use pulse::PulseSolution;
pub use retardation::RetardedSolution;
pub use solution::{
    AnalyticalSolution, Concentration, Coordinates, evaluate_pulse_solution,
    evaluate_retarded_solution,
};
pub use special::{SpecialFunctions, Statrs};
pub use view::ViewConfig;
