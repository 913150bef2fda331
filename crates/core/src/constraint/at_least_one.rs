use std::cmp::Ordering;

use num_traits::One;

use crate::constraint::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is one or greater.
///
/// Retardation factors live here: a value of one means no sorption.
///
/// # Examples
///
/// ```
/// use solute_core::constraint::AtLeastOne;
///
/// assert!(AtLeastOne::new(1.0).is_ok());
/// assert!(AtLeastOne::new(2.5).is_ok());
/// assert!(AtLeastOne::new(0.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AtLeastOne;

impl AtLeastOne {
    /// Constructs `Constrained<T, AtLeastOne>` if `value >= 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: PartialOrd + One>(
        value: T,
    ) -> Result<Constrained<T, AtLeastOne>, ConstraintError> {
        Constrained::<T, AtLeastOne>::new(value)
    }

    /// Returns the lower bound (one) as a constrained value.
    #[must_use]
    pub fn one<T: PartialOrd + One>() -> Constrained<T, AtLeastOne> {
        Constrained {
            value: T::one(),
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T: PartialOrd + One> Constraint<T> for AtLeastOne {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::BelowMinimum),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
