use num_traits::Float;

use crate::constraint::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a floating-point value is neither infinite nor NaN.
///
/// # Examples
///
/// ```
/// use solute_core::constraint::Finite;
///
/// assert!(Finite::new(-4.0).is_ok());
/// assert!(Finite::new(f64::INFINITY).is_err());
/// assert!(Finite::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Finite;

impl Finite {
    /// Constructs `Constrained<T, Finite>` if `value` is finite.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::NotANumber`] if the value is NaN.
    /// - [`ConstraintError::Infinite`] if the value is positive or negative infinity.
    pub fn new<T: Float>(value: T) -> Result<Constrained<T, Finite>, ConstraintError> {
        Constrained::<T, Finite>::new(value)
    }
}

impl<T: Float> Constraint<T> for Finite {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value.is_infinite() {
            Err(ConstraintError::Infinite)
        } else {
            Ok(())
        }
    }
}
