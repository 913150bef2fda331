//! Error function adapters.
//!
//! The solution kernels only need `erfc` and its logarithm. Both are reached
//! through [`SpecialFunctions`] so a different special-function library can
//! be swapped in without touching the kernels.

use std::f64::consts::PI;

use ndarray::{Array, ArrayBase, Data, Dimension};

/// Above this argument `erfc` approaches the subnormal range and `ln(erfc)`
/// is taken from the continued fraction instead.
const LN_ERFC_CUTOFF: f64 = 26.0;

/// Depth of the backward-evaluated continued fraction used past the cutoff.
const CONTINUED_FRACTION_TERMS: u32 = 40;

/// The error functions required by the transport solutions.
///
/// Implementations must follow IEEE semantics at the extremes:
/// `erfc(+inf) = 0`, `erfc(-inf) = 2`, and NaN in gives NaN out.
pub trait SpecialFunctions {
    /// The error function.
    fn erf(&self, z: f64) -> f64;

    /// The complementary error function, `1 - erf(z)`, without cancellation.
    fn erfc(&self, z: f64) -> f64;

    /// The natural logarithm of `erfc(z)`.
    ///
    /// The default stays finite for every finite `z` by switching to the
    /// Laplace continued fraction once `erfc(z)` would lose precision.
    /// `ln_erfc(+inf)` is `-inf`, the IEEE representation of `ln(0)`.
    fn ln_erfc(&self, z: f64) -> f64 {
        if z > LN_ERFC_CUTOFF {
            ln_erfc_continued_fraction(z)
        } else {
            self.erfc(z).ln()
        }
    }
}

/// Error functions backed by [`statrs`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statrs;

impl SpecialFunctions for Statrs {
    fn erf(&self, z: f64) -> f64 {
        statrs::function::erf::erf(z)
    }

    fn erfc(&self, z: f64) -> f64 {
        if z.is_nan() {
            return f64::NAN;
        }
        statrs::function::erf::erfc(z)
    }
}

/// Applies `erf` to every element of `z`.
pub fn erf_array<F, S, D>(special: &F, z: &ArrayBase<S, D>) -> Array<f64, D>
where
    F: SpecialFunctions,
    S: Data<Elem = f64>,
    D: Dimension,
{
    z.mapv(|z| special.erf(z))
}

/// Applies `erfc` to every element of `z`.
pub fn erfc_array<F, S, D>(special: &F, z: &ArrayBase<S, D>) -> Array<f64, D>
where
    F: SpecialFunctions,
    S: Data<Elem = f64>,
    D: Dimension,
{
    z.mapv(|z| special.erfc(z))
}

/// `ln(erfc(z))` for large positive `z`.
///
/// Uses `erfc(z) = exp(-z²) / (√π (z + ½/(z + 1/(z + 3/2/(z + ...)))))`,
/// evaluated from the tail.
fn ln_erfc_continued_fraction(z: f64) -> f64 {
    if z == f64::INFINITY {
        return f64::NEG_INFINITY;
    }

    let tail = (1..=CONTINUED_FRACTION_TERMS)
        .rev()
        .fold(0.0, |tail, n| f64::from(n) / 2.0 / (z + tail));

    -z * z - 0.5 * PI.ln() - (z + tail).ln()
}
