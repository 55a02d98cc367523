use num_bigint::BigInt;

/// The reconstructed constant term of the sharing polynomial.
pub type Secret = BigInt;
/// Number of points required to reconstruct a secret (`k`).
pub type Threshold = usize;
/// Radix of an encoded share value.
pub type Base = u32;

pub const MIN_BASE: Base = 2;
pub const MAX_BASE: Base = 36;

pub fn is_supported_base(base: Base) -> bool {
    (MIN_BASE..=MAX_BASE).contains(&base)
}
