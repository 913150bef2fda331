//! Concentration values labeled with the coordinates they were evaluated at.

use ndarray::{Array1, Array2, ArrayView1, Axis, Ix2, arr1};
use tracing::debug;

use crate::{EvaluationError, solution::AnalyticalSolution};

/// A concentration grid over a spatial axis and a temporal axis.
///
/// `values[[i, j]]` is the concentration at `x[i]` and `time[j]`. A profile
/// has a single time, a breakthrough curve has a single location. NaN marks
/// points where the solution is undefined and should be drawn as a gap.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcentrationField {
    x: Array1<f64>,
    time: Array1<f64>,
    values: Array2<f64>,
}

impl ConcentrationField {
    /// Evaluates `solution` on every combination of `x` and `time`.
    ///
    /// # Errors
    ///
    /// Propagates [`EvaluationError`] from the solution, which does not occur
    /// for a column-by-row grid.
    pub fn grid<S: AnalyticalSolution>(
        solution: &S,
        x: Array1<f64>,
        time: Array1<f64>,
    ) -> Result<Self, EvaluationError> {
        let values = solution
            .concentration(&x.view().insert_axis(Axis(1)), &time)?
            .into_dimensionality::<Ix2>()?;

        let field = Self { x, time, values };
        debug!(
            nx = field.x.len(),
            nt = field.time.len(),
            undefined = field.undefined_count(),
            "evaluated concentration field"
        );

        Ok(field)
    }

    /// Evaluates a concentration profile along `x` at a single `time`.
    ///
    /// # Errors
    ///
    /// See [`ConcentrationField::grid`].
    pub fn profile<S: AnalyticalSolution>(
        solution: &S,
        x: Array1<f64>,
        time: f64,
    ) -> Result<Self, EvaluationError> {
        Self::grid(solution, x, arr1(&[time]))
    }

    /// Evaluates a breakthrough curve over `time` at a single location `x`.
    ///
    /// # Errors
    ///
    /// See [`ConcentrationField::grid`].
    pub fn breakthrough<S: AnalyticalSolution>(
        solution: &S,
        x: f64,
        time: Array1<f64>,
    ) -> Result<Self, EvaluationError> {
        Self::grid(solution, arr1(&[x]), time)
    }

    #[must_use]
    pub fn x(&self) -> ArrayView1<'_, f64> {
        self.x.view()
    }

    #[must_use]
    pub fn time(&self) -> ArrayView1<'_, f64> {
        self.time.view()
    }

    #[must_use]
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Returns `[x, c]` pairs along the spatial axis at time index `j`.
    #[must_use]
    pub fn along_x(&self, j: usize) -> Option<Vec<[f64; 2]>> {
        (j < self.time.len()).then(|| {
            self.x
                .iter()
                .zip(self.values.column(j))
                .map(|(&x, &c)| [x, c])
                .collect()
        })
    }

    /// Returns `[t, c]` pairs along the temporal axis at location index `i`.
    #[must_use]
    pub fn along_time(&self, i: usize) -> Option<Vec<[f64; 2]>> {
        (i < self.x.len()).then(|| {
            self.time
                .iter()
                .zip(self.values.row(i))
                .map(|(&t, &c)| [t, c])
                .collect()
        })
    }

    /// Counts the points where the solution is undefined.
    #[must_use]
    pub fn undefined_count(&self) -> usize {
        self.values.iter().filter(|c| c.is_nan()).count()
    }
}
