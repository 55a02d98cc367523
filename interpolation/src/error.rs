use num_bigint::BigInt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InterpolationError {
    #[error("Cannot interpolate an empty set of points")]
    EmptyInput,
    #[error("Degenerate interpolation set: x = {x} appears more than once")]
    DuplicateAbscissa { x: BigInt },
    #[error("Threshold must be at least 1")]
    ZeroThreshold,
    #[error("Threshold requires {required} points but only {available} are available")]
    NotEnoughPoints { required: usize, available: usize },
    #[error("Fraction has a zero denominator")]
    ZeroDenominator,
}
