use crate::{Fraction, InterpolationError};
use log::debug;
use model::types_and_const::{Secret, Threshold};
use model::{Point, PointSet};
use num_bigint::BigInt;
use num_traits::{One, Zero};

/// Value at `x = 0` of the unique polynomial of degree `points.len() - 1`
/// through `points`.
///
/// The Lagrange terms are summed as one unreduced fraction and the result
/// is the quotient truncated toward zero. For points taken from a single
/// integer polynomial the division is exact; otherwise the remainder is
/// discarded, use [`interpolate_fraction_at`] to observe it.
///
/// Fails with [`InterpolationError::EmptyInput`] for no points and with
/// [`InterpolationError::DuplicateAbscissa`] when two points share `x`.
pub fn interpolate_at_zero(points: &[Point]) -> Result<Secret, InterpolationError> {
    interpolate_at(points, &BigInt::zero())
}

/// Same as [`interpolate_at_zero`] for an arbitrary target abscissa.
pub fn interpolate_at(points: &[Point], x: &BigInt) -> Result<BigInt, InterpolationError> {
    interpolate_fraction_at(points, x)?.truncate()
}

/// Sum of the Lagrange terms at `x`, before the final division.
pub fn interpolate_fraction_at(points: &[Point], x: &BigInt) -> Result<Fraction, InterpolationError> {
    if points.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }

    let mut result = Fraction::zero();
    for (j, current) in points.iter().enumerate() {
        let mut numerator = current.y().clone();
        let mut denominator = BigInt::one();

        for (m, other) in points.iter().enumerate() {
            if m == j {
                continue;
            }
            numerator *= x - other.x();
            denominator *= current.x() - other.x();
        }

        if denominator.is_zero() {
            return Err(InterpolationError::DuplicateAbscissa {
                x: current.x().clone(),
            });
        }
        result += Fraction::new(numerator, denominator);
    }

    debug!("Interpolated {} points at x = {}: {}", points.len(), x, result);
    Ok(result)
}

/// Interpolates the first `threshold` points of `points` at zero.
pub fn reconstruct_secret(points: &PointSet, threshold: Threshold) -> Result<Secret, InterpolationError> {
    if threshold == 0 {
        return Err(InterpolationError::ZeroThreshold);
    }
    let selected = points
        .first(threshold)
        .ok_or(InterpolationError::NotEnoughPoints {
            required: threshold,
            available: points.len(),
        })?;
    interpolate_at_zero(selected)
}
