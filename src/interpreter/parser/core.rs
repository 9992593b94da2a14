use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::parse_additive, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum nesting of groups, calls, prefix signs, `**` chains and function
/// bodies.
///
/// Deeper input yields `ParseError::NestingTooDeep` instead of exhausting the
/// native stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses a whole program.
///
/// Statements are parsed one after another until the EOF token is reached.
/// No separator is needed between statements: `x = 1 x + 1` holds two.
/// Parsing stops at the first error and no partial program is returned.
///
/// Grammar: `program := statement* EOF`
///
/// # Parameters
/// - `tokens`: Tokens produced by [`scan`](crate::interpreter::lexer::scan).
///
/// # Returns
/// The statements in source order.
///
/// # Example
/// ```
/// use reckon::interpreter::{lexer::scan, parser::core::parse};
///
/// let tokens = scan("x = 1 + 2 x * 2").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// assert_eq!(program.len(), 2);
/// assert_eq!(program[0].to_string(), "x = (1 + 2)");
/// assert_eq!(program[1].to_string(), "(x * 2)");
///
/// let tokens = scan("(1 + 2 * 3").unwrap();
/// assert!(parse(&tokens).is_err());
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Vec<Statement>> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while let Some(token) = iter.peek()
          && token.kind != TokenKind::Eof
    {
        statements.push(parse_statement(&mut iter, 0)?);
    }

    Ok(statements)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the lowest
/// precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := addition`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Nesting depth of the expression; `0` at statement level.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_additive(tokens, depth)
}
