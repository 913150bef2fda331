//! Configuration consumed by a visualization front end.
//!
//! Nothing here renders. [`ViewConfig`] carries the coordinate grids,
//! parameter ranges, and observation points a dashboard binds its controls
//! to, and [`ViewConfig::compose`] produces the data behind its two plots.

use std::str::FromStr;

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::{
    ConfigError, EvaluationError, field::ConcentrationField, params::TransportParameters,
    solution::AnalyticalSolution,
};

/// An evenly spaced coordinate axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub start: f64,
    pub end: f64,
    pub num: usize,
    pub units: String,
}

impl Grid {
    /// Returns the `num` coordinates from `start` to `end` inclusive.
    #[must_use]
    pub fn values(&self) -> Array1<f64> {
        Array1::linspace(self.start, self.end, self.num)
    }
}

/// The span and default of an adjustable scalar parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    pub start: f64,
    pub end: f64,
    pub step: f64,
    pub value: f64,
}

/// The most slider positions a range may describe.
const MAX_STEPS: f64 = 10_000.0;

impl ParameterRange {
    /// Returns every value reachable from `start` in whole steps up to `end`.
    ///
    /// An invalid range has no reachable values and yields an empty list.
    #[must_use]
    pub fn steps(&self) -> Vec<f64> {
        let Some(count) = self.step_count() else {
            return Vec::new();
        };
        (0..count)
            .map(|i| self.start + f64::from(i) * self.step)
            .collect()
    }

    fn is_valid(&self) -> bool {
        self.step_count().is_some() && self.start <= self.value && self.value <= self.end
    }

    /// Number of whole steps from `start` to `end`, if the range is usable.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn step_count(&self) -> Option<u32> {
        if !(self.start.is_finite() && self.end.is_finite() && self.step > 0.0) {
            return None;
        }
        let count = ((self.end - self.start) / self.step + 1e-9).floor() + 1.0;
        (1.0..=MAX_STEPS)
            .contains(&count)
            .then_some(count as u32)
    }
}

/// Grids, ranges, and observation points for an interactive view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub x: Grid,
    pub time: Grid,
    pub dispersion: ParameterRange,
    pub velocity: ParameterRange,
    pub observation_x: f64,
    pub observation_time: f64,
    pub boundary_concentration: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            x: Grid {
                start: 0.0,
                end: 200.0,
                num: 11,
                units: "m".into(),
            },
            time: Grid {
                start: 0.0,
                end: 20.0,
                num: 201,
                units: "years".into(),
            },
            dispersion: ParameterRange {
                start: 1.0,
                end: 10.0,
                step: 2.0,
                value: 3.0,
            },
            velocity: ParameterRange {
                start: 5.0,
                end: 30.0,
                step: 2.0,
                value: 10.0,
            },
            observation_x: 100.0,
            observation_time: 10.0,
            boundary_concentration: 1.0,
        }
    }
}

/// The data behind a profile plot and a breakthrough plot.
#[derive(Debug, Clone, PartialEq)]
pub struct Views {
    pub profile: ConcentrationField,
    pub breakthrough: ConcentrationField,
}

impl ViewConfig {
    /// Checks that grids are non-empty and ranges contain their defaults.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.x.num == 0 {
            return Err(ConfigError::EmptyGrid { axis: "x" });
        }
        if self.time.num == 0 {
            return Err(ConfigError::EmptyGrid { axis: "time" });
        }
        if !self.dispersion.is_valid() {
            return Err(ConfigError::Range {
                parameter: "dispersion",
            });
        }
        if !self.velocity.is_valid() {
            return Err(ConfigError::Range {
                parameter: "velocity",
            });
        }
        if self.observation_x.is_nan() {
            return Err(ConfigError::Observation { coordinate: "x" });
        }
        if self.observation_time.is_nan() {
            return Err(ConfigError::Observation { coordinate: "time" });
        }
        Ok(())
    }

    /// Returns transport parameters at the default slider positions.
    ///
    /// Parameters without a slider keep their [`TransportParameters`] default.
    #[must_use]
    pub fn parameters(&self) -> TransportParameters {
        TransportParameters {
            boundary_concentration: self.boundary_concentration,
            velocity: self.velocity.value,
            dispersion: self.dispersion.value,
            ..TransportParameters::default()
        }
    }

    /// Returns the concentration axis limits, `(0, c_boundary)`.
    #[must_use]
    pub fn concentration_limits(&self) -> (f64, f64) {
        (0.0, self.boundary_concentration)
    }

    /// Evaluates the profile at the observation time and the breakthrough
    /// curve at the observation location.
    ///
    /// # Errors
    ///
    /// Propagates any [`EvaluationError`] from the solution.
    pub fn compose<S: AnalyticalSolution>(&self, solution: &S) -> Result<Views, EvaluationError> {
        let profile =
            ConcentrationField::profile(solution, self.x.values(), self.observation_time)?;
        let breakthrough =
            ConcentrationField::breakthrough(solution, self.observation_x, self.time.values())?;

        Ok(Views {
            profile,
            breakthrough,
        })
    }
}

impl FromStr for ViewConfig {
    type Err = ConfigError;

    /// Parses a TOML document; omitted tables keep their defaults.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
