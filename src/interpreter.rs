/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the syntax tree, applies arithmetic, manages the
/// variable environment and the function table, and reports runtime errors
/// such as division by zero or calls to unknown functions.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads raw source text and produces a stream of tokens: numbers,
/// identifiers, operators, delimiters and the `def` keyword. Each token keeps
/// its source text and line number. This is the first stage of
/// interpretation.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Encodes operator precedence and associativity in the shape of the tree.
/// - Reports the first syntax violation with the offending token and line.
pub mod parser;
/// The value module defines the runtime numeric type.
///
/// Values are 64-bit integers or double precision reals; integers are
/// promoted to reals when the two meet.
pub mod value;
