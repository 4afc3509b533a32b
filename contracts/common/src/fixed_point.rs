//! Scaled integer arithmetic for reward accounting.
//!
//! Values are plain `i128` token units. Ratios (such as a participant's share
//! of the pool) are carried as fixed-point numbers scaled by [`SCALE`].
//! Every helper behaves as if it multiplied at full width before dividing, and
//! truncates toward zero, so a rounding error can only ever leave dust in the
//! pool, never over-credit.

/// Fixed-point scaling factor (10^18).
pub const SCALE: i128 = 1_000_000_000_000_000_000;

/// Failure modes of the checked helpers below.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MathError {
    /// A result (or partial product) left the `i128` range.
    Overflow,
    /// The divisor was zero.
    DivisionByZero,
}

/// `a * b / denominator`, truncating toward zero, for non-negative inputs.
///
/// The result is the exact quotient of the full-width product, but the
/// product itself is never formed: with `a = q·d + r` the value is
/// `q·b + r·b / d`. It only fails when that quotient (or `r·b`, which is
/// below `d·b`) does not fit in `i128`.
pub fn mul_div(a: i128, b: i128, denominator: i128) -> Result<i128, MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }
    let quotient = a / denominator;
    let remainder = a % denominator;
    let whole = quotient.checked_mul(b).ok_or(MathError::Overflow)?;
    let part = remainder.checked_mul(b).ok_or(MathError::Overflow)? / denominator;
    whole.checked_add(part).ok_or(MathError::Overflow)
}

/// `part * SCALE / whole`, the scaled ratio of `part` to `whole`.
pub fn ratio(part: i128, whole: i128) -> Result<i128, MathError> {
    mul_div(part, SCALE, whole)
}

/// `value * scaled_ratio / SCALE`, applying a ratio produced by [`ratio`].
pub fn apply_ratio(value: i128, scaled_ratio: i128) -> Result<i128, MathError> {
    mul_div(value, scaled_ratio, SCALE)
}

pub fn checked_add(a: i128, b: i128) -> Result<i128, MathError> {
    a.checked_add(b).ok_or(MathError::Overflow)
}

pub fn checked_sub(a: i128, b: i128) -> Result<i128, MathError> {
    a.checked_sub(b).ok_or(MathError::Overflow)
}
