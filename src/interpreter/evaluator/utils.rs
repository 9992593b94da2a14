use crate::interpreter::{evaluator::core::Context, value::Value};

impl Context {
    /// Retrieves a variable from the environment.
    ///
    /// While a function body is being evaluated this includes the call's
    /// parameter bindings.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{evaluator::core::Context, value::Value};
    ///
    /// let mut context = Context::new();
    /// context.set_variable("x", Value::Integer(5));
    ///
    /// assert_eq!(context.get_variable("x"), Some(Value::Integer(5)));
    /// assert_eq!(context.get_variable("y"), None);
    /// ```
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<Value> {
        self.variables.get(name).copied()
    }

    /// Binds a variable, overwriting any previous binding.
    pub fn set_variable(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// Returns the names of all bound variables in sorted order.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{evaluator::core::Context, value::Value};
    ///
    /// let mut context = Context::new();
    /// context.set_variable("y", Value::Integer(2));
    /// context.set_variable("x", Value::Integer(1));
    ///
    /// assert_eq!(context.variable_names(), ["x", "y"]);
    /// ```
    #[must_use]
    pub fn variable_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.variables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the names of all defined functions in sorted order.
    #[must_use]
    pub fn function_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Forgets every variable and function.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{evaluator::core::Context, value::Value};
    ///
    /// let mut context = Context::new();
    /// context.set_variable("x", Value::Integer(1));
    /// context.reset();
    ///
    /// assert!(context.variables.is_empty());
    /// ```
    pub fn reset(&mut self) {
        self.variables.clear();
        self.functions.clear();
        self.depth = 0;
    }
}
