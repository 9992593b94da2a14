/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    #[error("Error on line {line}: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that was never defined.
    #[error("Error on line {line}: Undefined function '{name}'.")]
    UndefinedFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Error on line {line}: Function '{name}' takes {expected} argument(s), but got {found}.")]
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed.
    #[error("Error on line {line}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function body produced no value (its body is a definition).
    #[error("Error on line {line}: Function '{name}' does not produce a value.")]
    MissingValue {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Nested calls went deeper than the interpreter allows.
    #[error("Error on line {line}: Maximum call depth exceeded while calling '{name}'.")]
    RecursionLimit {
        /// The function whose call exceeded the limit.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}
