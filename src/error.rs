/// Lexical errors.
///
/// Raised while turning source text into tokens: characters that belong to no
/// token, and integer literals too large to represent.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// a token sequence. Parsing aborts on the first violation, so a single error
/// describes the whole failure.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unknown
/// names, arity mismatches, division by zero and arithmetic overflow.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
