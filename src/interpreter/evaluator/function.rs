use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, MAX_CALL_DEPTH},
        value::Value,
    },
};

impl Context {
    /// Evaluates a function call expression.
    ///
    /// The function is looked up first, then the argument count is checked,
    /// and only then are the arguments evaluated, left to right, in the
    /// caller's environment.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Argument expressions.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `RuntimeError::UndefinedFunction` if no function has this name.
    /// - `RuntimeError::ArityMismatch` if the argument count differs from the
    ///   parameter count.
    /// - Any error raised by an argument or by the body.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::{BinaryOperator, Expr, FunctionDef, Statement},
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let mut context = Context::new();
    ///
    /// // def f(x) = { x + 1 }
    /// let body = Expr::BinaryOp { left:  Box::new(Expr::Variable { name: "x".into(), line: 1 }),
    ///                             op:    BinaryOperator::Add,
    ///                             right: Box::new(Expr::Number { value: 1, line: 1 }),
    ///                             line:  1, };
    /// context.functions.insert("f".into(),
    ///                          FunctionDef { name:   "f".into(),
    ///                                        params: vec!["x".into()],
    ///                                        body:   Box::new(Statement::Expression { expr: body,
    ///                                                                                 line: 1 }),
    ///                                        line:   1, });
    ///
    /// let arg = Expr::Number { value: 10, line: 1 };
    /// let result = context.eval_function_call("f", &[arg], 1).unwrap();
    ///
    /// assert_eq!(result, Value::Integer(11));
    /// assert_eq!(context.get_variable("x"), None);
    /// ```
    pub fn eval_function_call(&mut self,
                              name: &str,
                              arguments: &[Expr],
                              line: usize)
                              -> EvalResult<Value> {
        let func = self.functions
                       .get(name)
                       .cloned()
                       .ok_or_else(|| RuntimeError::UndefinedFunction { name: name.to_string(),
                                                                        line })?;

        if arguments.len() != func.params.len() {
            return Err(RuntimeError::ArityMismatch { name: name.to_string(),
                                                     expected: func.params.len(),
                                                     found: arguments.len(),
                                                     line });
        }

        let mut args = Vec::with_capacity(arguments.len());
        for expr in arguments {
            args.push(self.eval(expr)?);
        }

        self.call_user_defined_function(&func, args, line)
    }

    /// Executes a user-defined function with already evaluated arguments.
    ///
    /// The caller's variables are snapshotted, the parameters are bound on top
    /// of them (shadowing same-named globals) and the body is evaluated. The
    /// snapshot is restored before returning on every path, so neither the
    /// parameter bindings nor assignments made by the body outlive the call.
    /// Functions defined by the body do persist.
    ///
    /// # Errors
    /// - `RuntimeError::RecursionLimit` if calls nest deeper than
    ///   [`MAX_CALL_DEPTH`].
    /// - `RuntimeError::MissingValue` if the body is a definition.
    fn call_user_defined_function(&mut self,
                                  func: &FunctionDef,
                                  args: Vec<Value>,
                                  line: usize)
                                  -> EvalResult<Value> {
        if self.depth >= MAX_CALL_DEPTH {
            return Err(RuntimeError::RecursionLimit { name: func.name.clone(),
                                                      line });
        }

        let snapshot = self.variables.clone();
        self.variables.extend(func.params.iter().cloned().zip(args));

        self.depth += 1;
        let result = self.eval_statement(&func.body);
        self.depth -= 1;
        self.variables = snapshot;

        result?.ok_or_else(|| RuntimeError::MissingValue { name: func.name.clone(),
                                                           line })
    }
}
