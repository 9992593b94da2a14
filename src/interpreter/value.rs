use std::fmt;

use crate::util::num::i64_to_f64;

/// Represents a runtime value in the interpreter.
///
/// Literals are integers; a value becomes real once true division or a
/// fractional power is involved. Mixed operations promote the integer side to
/// real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Real(f64),
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(3).as_real(), 3.0);
    /// assert_eq!(Value::Real(2.5).as_real(), 2.5);
    /// ```
    #[must_use]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(n),
            Self::Real(r) => r,
        }
    }

    /// Returns `true` for integer zero and for real `0.0` (of either sign).
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }

    /// Returns `true` if the value is negative.
    #[must_use]
    pub fn is_negative(self) -> bool {
        match self {
            Self::Integer(n) => n < 0,
            Self::Real(r) => r < 0.0,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}
