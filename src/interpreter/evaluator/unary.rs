use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// `+x` returns the operand unchanged; `-x` negates it. Integer negation
    /// is checked.
    ///
    /// # Errors
    /// `RuntimeError::Overflow` when negating `i64::MIN`.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, Value::Integer(5), 1).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Plus, Value::Real(-1.5), 1).unwrap();
    /// assert_eq!(v, Value::Real(-1.5));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Plus => Ok(value),
            UnaryOperator::Negate => match value {
                Value::Integer(n) => n.checked_neg()
                                      .map(Value::Integer)
                                      .ok_or(RuntimeError::Overflow { line }),
                Value::Real(r) => Ok(Value::Real(-r)),
            },
        }
    }
}
