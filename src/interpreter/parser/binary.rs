use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary, utils::nested},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `addition := multiplication (("+" | "-") multiplication)*`
///
/// # Parameters
/// - `tokens`: Token stream with lookahead.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_multiplicative(tokens, depth)?;
    loop {
        if let Some(&token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token.kind)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line: token.line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`.
///
/// The rule is: `multiplication := exponent (("*" | "/") exponent)*`
///
/// # Parameters
/// - `tokens`: Token stream with lookahead.
///
/// # Returns
/// A binary expression tree combining exponent-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_exponent(tokens, depth)?;
    loop {
        if let Some(&token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token.kind)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.next();
            let right = parse_exponent(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line: token.line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: the right operand is parsed by a
/// recursive call, so `a ** b ** c` parses as `a ** (b ** c)`. The left
/// operand is a unary expression, so `-2 ** 2` parses as `(-2) ** 2`.
///
/// The rule is: `exponent := unary ("**" exponent)?`
///
/// # Parameters
/// - `tokens`: Token stream with lookahead.
/// - `depth`: Current nesting depth; each `**` on the right adds a level.
///
/// # Returns
/// An exponentiation expression tree.
///
/// # Example
/// ```
/// use reckon::interpreter::{lexer::scan, parser::core::parse};
///
/// let program = parse(&scan("2 ** 3 ** 2").unwrap()).unwrap();
/// assert_eq!(program[0].to_string(), "(2 ** (3 ** 2))");
///
/// let program = parse(&scan("-2 ** 2").unwrap()).unwrap();
/// assert_eq!(program[0].to_string(), "((-2) ** 2)");
/// ```
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let base = parse_unary(tokens, depth)?;

    if let Some(&token) = tokens.peek()
       && token.kind == TokenKind::Exponent
    {
        tokens.next();
        let depth = nested(tokens, depth)?;
        let exponent = parse_exponent(tokens, depth)?;
        return Ok(Expr::BinaryOp { left:  Box::new(base),
                                   op:    BinaryOperator::Pow,
                                   right: Box::new(exponent),
                                   line:  token.line, });
    }

    Ok(base)
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (`+`, `-`, `*`, `/`, `**`) and `None` for all other tokens.
///
/// # Example
/// ```
/// use reckon::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(TokenKind::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Multiply => Some(BinaryOperator::Mul),
        TokenKind::Divide => Some(BinaryOperator::Div),
        TokenKind::Exponent => Some(BinaryOperator::Pow),
        _ => None,
    }
}
