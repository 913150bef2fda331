use ndarray::ShapeError;
use solute_core::constraint::ConstraintError;
use thiserror::Error;

/// Errors that abort an evaluation.
///
/// Invalid physical inputs never appear here: they propagate as NaN through
/// the returned field. Only coordinate arrays that cannot be combined stop a
/// call.
#[derive(Debug, Error)]
pub enum EvaluationError {
    /// The spatial and temporal coordinates are not broadcast-compatible.
    #[error("cannot broadcast x with shape {x:?} against t with shape {t:?}")]
    Broadcast { x: Vec<usize>, t: Vec<usize> },

    /// An evaluated field did not have the expected dimensionality.
    #[error("unexpected field shape")]
    Shape(#[from] ShapeError),
}

/// Errors returned when checking transport parameters against their
/// physical domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("invalid boundary concentration")]
    BoundaryConcentration(#[source] ConstraintError),

    #[error("invalid velocity")]
    Velocity(#[source] ConstraintError),

    #[error("invalid dispersion coefficient")]
    Dispersion(#[source] ConstraintError),

    #[error("invalid reaction rate")]
    ReactionRate(#[source] ConstraintError),

    #[error("invalid pulse duration")]
    PulseDuration(#[source] ConstraintError),

    #[error("invalid retardation factor")]
    Retardation(#[source] ConstraintError),
}

/// Errors that can occur when loading or validating a [`ViewConfig`].
///
/// [`ViewConfig`]: crate::view::ViewConfig
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse view config")]
    Parse(#[from] toml::de::Error),

    #[error("grid `{axis}` must have at least one point")]
    EmptyGrid { axis: &'static str },

    /// The range is unbounded, steps too finely, or excludes its default value.
    #[error("invalid range for `{parameter}`")]
    Range { parameter: &'static str },

    #[error("observation {coordinate} must be a number")]
    Observation { coordinate: &'static str },
}
