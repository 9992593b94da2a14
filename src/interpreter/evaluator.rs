/// Core evaluation logic and context management.
///
/// Contains the runtime `Context` (variable environment and function table)
/// and the dispatch over statement and expression variants.
pub mod core;

/// Binary operator evaluation logic.
///
/// Implements `+ - * /` and `**` over integers and reals, including overflow
/// and division-by-zero checks.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements prefix negation and identity.
pub mod unary;

/// Function evaluation.
///
/// Handles calls to user-defined functions: lookup, arity checking, argument
/// binding and restoring the caller's environment afterwards.
pub mod function;

/// Utility functions for evaluation.
///
/// Variable lookup and assignment helpers, and session inspection.
pub mod utils;
