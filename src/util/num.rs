use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Converts an `i64` to `f64` for mixed integer/real arithmetic.
///
/// Magnitudes beyond `2^53` are rounded to the nearest representable `f64`.
///
/// ## Example
/// ```
/// use reckon::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(-7), -7.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Safely converts an `i64` exponent to a `u32`.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the value is negative or larger than
/// `u32::MAX`; callers handle negative exponents before reaching here.
///
/// ## Example
/// ```
/// use reckon::{error::RuntimeError, util::num::i64_to_u32_checked};
///
/// assert_eq!(i64_to_u32_checked(45, 5).unwrap(), 45);
///
/// let err = i64_to_u32_checked(i64::MAX, 11).unwrap_err();
/// assert!(matches!(err, RuntimeError::Overflow { line: 11 }));
/// ```
pub fn i64_to_u32_checked(value: i64, line: usize) -> EvalResult<u32> {
    u32::try_from(value).map_err(|_| RuntimeError::Overflow { line })
}
