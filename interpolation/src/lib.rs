mod error;
pub mod fraction;
pub mod lagrange;

pub use error::InterpolationError;
pub use fraction::Fraction;
pub use lagrange::{interpolate_at, interpolate_at_zero, interpolate_fraction_at, reconstruct_secret};

#[cfg(test)]
#[path = "tests/fraction_tests.rs"]
pub mod fraction_tests;

#[cfg(test)]
#[path = "tests/lagrange_tests.rs"]
pub mod lagrange_tests;
