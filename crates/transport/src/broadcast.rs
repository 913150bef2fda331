//! Elementwise evaluation over broadcast coordinate arrays.
//!
//! Shapes combine the usual way: they are aligned on their trailing axes,
//! missing leading axes count as length one, and an axis of length one
//! stretches to match the other operand. A 0-d array is a scalar.

use ndarray::{ArrayBase, ArrayD, Data, Dimension, IxDyn, Zip};

use crate::EvaluationError;

/// Computes the shape that `x` and `t` broadcast to.
///
/// # Errors
///
/// Returns [`EvaluationError::Broadcast`] if an axis differs and neither
/// length is one.
pub fn broadcast_shape(x: &[usize], t: &[usize]) -> Result<Vec<usize>, EvaluationError> {
    let ndim = x.len().max(t.len());
    let len_at = |shape: &[usize], axis: usize| {
        axis.checked_sub(ndim - shape.len()).map_or(1, |index| shape[index])
    };

    (0..ndim)
        .map(|axis| match (len_at(x, axis), len_at(t, axis)) {
            (m, n) if m == n => Ok(m),
            (1, n) => Ok(n),
            (m, 1) => Ok(m),
            _ => Err(EvaluationError::Broadcast {
                x: x.to_vec(),
                t: t.to_vec(),
            }),
        })
        .collect()
}

/// Broadcasts `x` against `t` and applies `kernel` to every pair.
///
/// The whole grid is produced by a single call, with the result laid out in
/// the broadcast shape.
///
/// # Errors
///
/// Returns [`EvaluationError::Broadcast`] if the shapes are incompatible.
pub fn zip_with<Sx, Dx, St, Dt, K>(
    x: &ArrayBase<Sx, Dx>,
    t: &ArrayBase<St, Dt>,
    kernel: K,
) -> Result<ArrayD<f64>, EvaluationError>
where
    Sx: Data<Elem = f64>,
    Dx: Dimension,
    St: Data<Elem = f64>,
    Dt: Dimension,
    K: Fn(f64, f64) -> f64,
{
    let shape = IxDyn(&broadcast_shape(x.shape(), t.shape())?);
    let incompatible = || EvaluationError::Broadcast {
        x: x.shape().to_vec(),
        t: t.shape().to_vec(),
    };

    let x = x.broadcast(shape.clone()).ok_or_else(incompatible)?;
    let t = t.broadcast(shape).ok_or_else(incompatible)?;

    Ok(Zip::from(&x).and(&t).map_collect(|&x, &t| kernel(x, t)))
}

#[cfg(test)]
mod tests {
    use ndarray::{Array1, Axis, arr0, array};

    use super::*;

    #[test]
    fn shapes_follow_trailing_alignment() {
        let cases: [(&[usize], &[usize], &[usize]); 6] = [
            (&[], &[], &[]),
            (&[5], &[], &[5]),
            (&[], &[7], &[7]),
            (&[4, 1], &[3], &[4, 3]),
            (&[2, 1, 6], &[5, 1], &[2, 5, 6]),
            (&[0], &[1], &[0]),
        ];

        for (x, t, expected) in cases {
            assert_eq!(broadcast_shape(x, t).unwrap(), expected, "{x:?} with {t:?}");
        }
    }

    #[test]
    fn incompatible_shapes_report_both_operands() {
        let error = broadcast_shape(&[3], &[4]).unwrap_err();
        assert!(matches!(
            error,
            EvaluationError::Broadcast { ref x, ref t } if x == &[3] && t == &[4]
        ));
    }

    #[test]
    fn scalar_with_array() {
        let t = array![1.0, 2.0, 3.0];
        let out = zip_with(&arr0(10.0), &t, |x, t| x + t).unwrap();
        assert_eq!(out, array![11.0, 12.0, 13.0].into_dyn());
    }

    #[test]
    fn column_against_row_builds_a_grid() {
        let x = Array1::linspace(0.0, 2.0, 3).insert_axis(Axis(1));
        let t = array![10.0, 20.0];
        let out = zip_with(&x, &t, |x, t| x * t).unwrap();

        assert_eq!(out.shape(), &[3, 2]);
        assert_eq!(out, array![[0.0, 0.0], [10.0, 20.0], [20.0, 40.0]].into_dyn());
    }

    #[test]
    fn mismatched_lengths_fail() {
        let x = array![1.0, 2.0, 3.0];
        let t = array![1.0, 2.0, 3.0, 4.0];
        assert!(zip_with(&x, &t, |x, t| x + t).is_err());
    }
}
