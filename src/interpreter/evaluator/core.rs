use std::collections::HashMap;

use crate::{
    ast::{Expr, FunctionDef, Statement},
    error::RuntimeError,
    interpreter::value::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Maximum nesting of user-defined function calls.
///
/// Exceeding it yields `RuntimeError::RecursionLimit` instead of exhausting the
/// native stack.
pub const MAX_CALL_DEPTH: usize = 256;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: every variable assignment and
/// every user-defined function. It lives for a whole session, so bindings made
/// by one statement are visible to the next.
///
/// ## Scoping
///
/// Scoping is dynamic. A function call copies the caller's variables, binds
/// its parameters on top of the copy and evaluates the body there; the
/// caller's variables are put back afterwards, whether the body succeeded or
/// failed. A body therefore sees the globals present at call time, and
/// nothing it assigns survives the call.
#[derive(Debug, Default, Clone)]
pub struct Context {
    /// A mapping from variable names to their most recently assigned value.
    pub variables: HashMap<String, Value>,
    /// A mapping from function names to their [`FunctionDef`] definitions.
    /// Populated when evaluating statements like `def square(x) = { x * x }`.
    pub functions: HashMap<String, FunctionDef>,
    /// Number of user-defined calls currently being evaluated.
    pub(crate) depth: usize,
}

impl Context {
    /// Creates a new evaluation context with no variables and no
    /// user-defined functions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Both operands
    /// of a binary operation are evaluated, left before right, before the
    /// operator is applied.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed value.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let mut context = Context::new();
    /// let expr = Expr::BinaryOp { left:  Box::new(Expr::Number { value: 6, line: 1 }),
    ///                             op:    BinaryOperator::Mul,
    ///                             right: Box::new(Expr::Number { value: 7, line: 1 }),
    ///                             line:  1, };
    ///
    /// assert_eq!(context.eval(&expr).unwrap(), Value::Integer(42));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::Integer(*value)),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, value, *line)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let lval = self.eval(left)?;
                let rval = self.eval(right)?;
                Self::eval_binary(*op, lval, rval, *line)
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => self.eval_function_call(name, arguments, *line),
        }
    }

    /// Evaluates a single statement.
    ///
    /// - A definition stores the function (replacing any previous one with
    ///   the same name) and yields no value.
    /// - An assignment evaluates its value, binds it (overwriting any previous
    ///   binding) and yields it.
    /// - An expression statement yields the expression's value.
    ///
    /// If evaluating an assignment's value fails, the variable keeps its
    /// previous binding.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    ///
    /// # Returns
    /// `Some(Value)` for assignments and expressions, `None` for definitions.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::{Expr, Statement},
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let mut context = Context::new();
    /// let statement = Statement::Assignment { name:  "x".to_string(),
    ///                                         value: Expr::Number { value: 3, line: 1 },
    ///                                         line:  1, };
    ///
    /// assert_eq!(context.eval_statement(&statement).unwrap(), Some(Value::Integer(3)));
    /// assert_eq!(context.get_variable("x"), Some(Value::Integer(3)));
    /// ```
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Option<Value>> {
        match statement {
            Statement::Definition(def) => {
                self.functions.insert(def.name.clone(), def.clone());
                Ok(None)
            },
            Statement::Assignment { name, value, .. } => {
                let value = self.eval(value)?;
                self.set_variable(name, value);
                Ok(Some(value))
            },
            Statement::Expression { expr, .. } => self.eval(expr).map(Some),
        }
    }

    /// Evaluates statements in order and returns the last statement's result.
    ///
    /// Evaluation stops at the first error; statements before it keep their
    /// effects.
    ///
    /// # Returns
    /// The result of the last statement, or `None` for an empty program.
    pub fn eval_program(&mut self, statements: &[Statement]) -> EvalResult<Option<Value>> {
        let mut result = None;
        for statement in statements {
            result = self.eval_statement(statement)?;
        }
        Ok(result)
    }

    /// Looks up a variable by name.
    ///
    /// # Errors
    /// `RuntimeError::UndefinedVariable` if the name was never assigned (or
    /// bound as a parameter of an enclosing call).
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.get_variable(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }
}
