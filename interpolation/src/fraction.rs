use crate::InterpolationError;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Unreduced rational `numerator / denominator` over big integers.
///
/// Sums are formed by cross multiplication and never brought to lowest
/// terms, so the denominator is the product of every term denominator
/// added so far. Equality compares values, so `1/2 == 2/4`; use the
/// accessors to compare representations.
#[derive(Debug, Clone)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    pub fn new(numerator: BigInt, denominator: BigInt) -> Self {
        Fraction {
            numerator,
            denominator,
        }
    }

    pub fn zero() -> Self {
        Fraction::new(BigInt::zero(), BigInt::one())
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Whether the denominator divides the numerator.
    pub fn is_integral(&self) -> bool {
        !self.denominator.is_zero() && (&self.numerator % &self.denominator).is_zero()
    }

    /// Integer quotient rounded toward zero.
    pub fn truncate(&self) -> Result<BigInt, InterpolationError> {
        if self.denominator.is_zero() {
            return Err(InterpolationError::ZeroDenominator);
        }
        Ok(&self.numerator / &self.denominator)
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        // A zero denominator has no value; only identical representations match.
        if self.denominator.is_zero() || other.denominator.is_zero() {
            return self.numerator == other.numerator && self.denominator == other.denominator;
        }
        &self.numerator * &other.denominator == &other.numerator * &self.denominator
    }
}

impl Eq for Fraction {}

impl Add for Fraction {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Fraction {
            numerator: self.numerator * &other.denominator + other.numerator * &self.denominator,
            denominator: self.denominator * other.denominator,
        }
    }
}

impl AddAssign for Fraction {
    fn add_assign(&mut self, other: Self) {
        self.numerator = &self.numerator * &other.denominator + other.numerator * &self.denominator;
        self.denominator *= other.denominator;
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
