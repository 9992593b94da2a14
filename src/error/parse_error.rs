/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A required token was missing.
    ///
    /// `message` names what the grammar expected at this point, e.g.
    /// `Expect ')' after expression.`
    #[error("Error on line {line}: {message} Found {found}.")]
    Expected {
        /// What the parser was looking for.
        message: &'static str,
        /// Description of the token actually found.
        found:   String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A token that cannot begin an expression.
    #[error("Error on line {line}: Expected expression, found {found}.")]
    ExpectedExpression {
        /// Description of the token actually found.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Groups, calls, prefix signs, `**` chains or function bodies nested
    /// deeper than the parser allows.
    #[error("Error on line {line}: Expression nested more than {limit} levels deep.")]
    NestingTooDeep {
        /// The nesting limit that was exceeded.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl ParseError {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Expected { line, .. }
            | Self::ExpectedExpression { line, .. }
            | Self::NestingTooDeep { line, .. } => *line,
        }
    }
}
