use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
    util::num::i64_to_u32_checked,
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// Routes `+`, `-` and `*` to [`Context::eval_scalar_op`], `/` to
    /// [`Context::eval_div`] and `**` to [`Context::eval_pow`].
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, Value::Integer(3), Value::Integer(4), 1);
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Value,
                       right: Value,
                       line: usize)
                       -> EvalResult<Value> {
        match op {
            BinaryOperator::Add | BinaryOperator::Sub | BinaryOperator::Mul => {
                Self::eval_scalar_op(op, left, right, line)
            },
            BinaryOperator::Div => Self::eval_div(left, right, line),
            BinaryOperator::Pow => Self::eval_pow(left, right, line),
        }
    }

    /// Evaluates `+`, `-` or `*`.
    ///
    /// Two integers use checked arithmetic; if either side is real, both are
    /// promoted to real. The operator must be one of `Add`, `Sub` or `Mul`;
    /// other operators are not processed here.
    ///
    /// # Errors
    /// `RuntimeError::Overflow` if integer arithmetic overflows.
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: Value,
                          right: Value,
                          line: usize)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Mul, Sub};
        use Value::{Integer, Real};

        match (left, right) {
            (Integer(a), Integer(b)) => {
                let result = match op {
                    Add => a.checked_add(b),
                    Sub => a.checked_sub(b),
                    Mul => a.checked_mul(b),
                    _ => unreachable!(),
                };
                result.map(Integer).ok_or(RuntimeError::Overflow { line })
            },
            _ => {
                let (a, b) = (left.as_real(), right.as_real());
                Ok(Real(match op {
                            Add => a + b,
                            Sub => a - b,
                            Mul => a * b,
                            _ => unreachable!(),
                        }))
            },
        }
    }

    /// Evaluates true division. The result is always real.
    ///
    /// # Errors
    /// `RuntimeError::DivisionByZero` if the divisor is zero.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{evaluator::core::Context, value::Value};
    ///
    /// assert_eq!(Context::eval_div(Value::Integer(10), Value::Integer(4), 1).unwrap(),
    ///            Value::Real(2.5));
    /// assert!(Context::eval_div(Value::Integer(4), Value::Integer(0), 1).is_err());
    /// ```
    pub fn eval_div(left: Value, right: Value, line: usize) -> EvalResult<Value> {
        if right.is_zero() {
            return Err(RuntimeError::DivisionByZero { line });
        }
        Ok(Value::Real(left.as_real() / right.as_real()))
    }

    /// Evaluates an exponentiation operation.
    ///
    /// Integer–integer exponentiation with a non-negative exponent uses
    /// checked arithmetic, so `0 ** 0` is `1`. Bases `0`, `1` and `-1` accept
    /// any such exponent. A negative exponent or a real operand falls back to
    /// floating-point `powf`.
    ///
    /// # Errors
    /// - `RuntimeError::DivisionByZero` when zero is raised to a negative
    ///   power.
    /// - `RuntimeError::Overflow` when an integer power overflows.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{evaluator::core::Context, value::Value};
    ///
    /// let result = Context::eval_pow(Value::Integer(2), Value::Integer(10), 1).unwrap();
    /// assert_eq!(result, Value::Integer(1024));
    ///
    /// let result = Context::eval_pow(Value::Integer(2), Value::Integer(-1), 1).unwrap();
    /// assert_eq!(result, Value::Real(0.5));
    /// ```
    pub fn eval_pow(base: Value, exponent: Value, line: usize) -> EvalResult<Value> {
        if base.is_zero() && exponent.is_negative() {
            return Err(RuntimeError::DivisionByZero { line });
        }

        match (base, exponent) {
            (Value::Integer(b @ (0 | 1)), Value::Integer(e)) if e >= 0 => {
                Ok(Value::Integer(if e == 0 { 1 } else { b }))
            },
            (Value::Integer(-1), Value::Integer(e)) if e >= 0 => {
                Ok(Value::Integer(if e % 2 == 0 { 1 } else { -1 }))
            },
            (Value::Integer(b), Value::Integer(e)) if e >= 0 => {
                b.checked_pow(i64_to_u32_checked(e, line)?)
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { line })
            },
            _ => Ok(Value::Real(base.as_real().powf(exponent.as_real()))),
        }
    }
}
