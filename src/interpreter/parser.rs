/// Parser entry points.
///
/// Holds the `ParseResult` alias, the program-level `parse` function and the
/// expression entry point that the other grammar modules descend from.
pub mod core;

/// Statement parsing.
///
/// Decides between function definitions, assignments and bare expressions,
/// using one token of lookahead past a leading identifier.
pub mod statement;

/// Binary operator parsing.
///
/// One function per precedence tier: additive, multiplicative and the
/// right-associative exponent tier.
pub mod binary;

/// Unary, call and primary expression parsing.
///
/// Handles prefix signs, function calls, literals, variables and
/// parenthesized groups.
pub mod unary;

/// Shared helpers for the grammar modules.
///
/// Provides `expect` (the single structural error path), identifier parsing
/// and comma-separated list parsing.
pub mod utils;
