//! # reckon
//!
//! reckon is a small interpreter for an expression-and-definition language
//! written in Rust. It evaluates arithmetic over integers and reals, binds
//! variables, and lets users define their own functions:
//!
//! ```text
//! x = 1 + 2
//! def add(a, b) = { a + b }
//! add(x, 4)
//! ```
//!
//! Source text flows through three stages: the [lexer](interpreter::lexer)
//! turns it into tokens, the [parser](interpreter::parser) builds a syntax
//! tree, and the [evaluator](interpreter::evaluator) computes values against a
//! persistent [`Context`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{LexError, ParseError, RuntimeError},
    interpreter::{
        evaluator::core::Context, lexer::scan, parser::core::parse, value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Renders trees back to text with explicit grouping.
pub mod ast;
/// Provides error types for lexing, parsing and evaluation.
///
/// Each stage has its own error enum; every variant carries the source line
/// where the failure occurred.
pub mod error;
/// Orchestrates the process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// These helpers convert between `i64`, `u32` and `f64` without silent data
/// loss, or report an overflow when a value cannot be represented.
pub mod util;

/// Any error produced while running source code.
///
/// Wraps the error of whichever stage failed; its message is the stage
/// error's message unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The source contained text that is not a token.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens did not form a valid program.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A statement failed while being evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// An interpreter session.
///
/// A session owns one evaluation [`Context`], so variables and functions
/// bound by one call to [`Session::run`] are visible to the next. The
/// interactive prompt keeps a single session for its whole lifetime.
#[derive(Debug, Default, Clone)]
pub struct Session {
    context: Context,
}

impl Session {
    /// Creates a session with no variables and no functions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans, parses and evaluates `source` against this session.
    ///
    /// The whole input is parsed before anything is evaluated, so a syntax
    /// error anywhere means no statement of this input runs. Statements are
    /// then evaluated in order; a runtime error stops evaluation, but the
    /// effects of the statements before it are kept.
    ///
    /// # Returns
    /// The value of the last statement, or `None` if the last statement was
    /// a definition or the input held no statements.
    ///
    /// # Example
    /// ```
    /// use reckon::{Session, interpreter::value::Value};
    ///
    /// let mut session = Session::new();
    ///
    /// assert_eq!(session.run("x = 1 + 2").unwrap(), Some(Value::Integer(3)));
    /// assert_eq!(session.run("def add(a, b) = { a + b }").unwrap(), None);
    /// assert_eq!(session.run("add(x, 4)").unwrap(), Some(Value::Integer(7)));
    /// assert!(session.run("add(x)").is_err());
    /// ```
    pub fn run(&mut self, source: &str) -> Result<Option<Value>, Error> {
        let tokens = scan(source)?;
        let statements = parse(&tokens)?;
        Ok(self.context.eval_program(&statements)?)
    }

    /// Returns the session's evaluation context.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// Forgets every variable and function bound so far.
    pub fn reset(&mut self) {
        self.context.reset();
    }
}

/// Runs `source` in a fresh session and returns the last statement's value.
///
/// # Examples
/// ```
/// use reckon::{interpreter::value::Value, run_source};
///
/// assert_eq!(run_source("2 ** 3 ** 2").unwrap(), Some(Value::Integer(512)));
/// assert_eq!(run_source("10 / 4").unwrap(), Some(Value::Real(2.5)));
///
/// // 'x' is never assigned.
/// assert!(run_source("y = x + 1").is_err());
/// ```
pub fn run_source(source: &str) -> Result<Option<Value>, Error> {
    Session::new().run(source)
}
