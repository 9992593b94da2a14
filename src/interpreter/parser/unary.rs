use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{check, describe_next, expect, nested, parse_comma_separated},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `-` (negation) and `+` (identity). Unary
/// operators nest, so `--x` is parsed as `-(-x)`.
///
/// If no unary operator is present, the function delegates to [`parse_call`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | call
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a call/primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let op = match tokens.peek().map(|token| token.kind) {
        Some(TokenKind::Minus) => UnaryOperator::Negate,
        Some(TokenKind::Plus) => UnaryOperator::Plus,
        _ => return parse_call(tokens, depth),
    };

    let line = tokens.next().map_or(0, |token| token.line);
    let depth = nested(tokens, depth)?;
    let expr = parse_unary(tokens, depth)?;
    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       line })
}

/// Parses a function call, or falls back to a primary expression.
///
/// An identifier immediately followed by `(` starts a call; its arguments are
/// full expressions separated by commas.
///
/// Grammar:
/// ```text
///     call := IDENTIFIER "(" (expression ("," expression)*)? ")"
///           | primary
/// ```
/// # Errors
/// Returns a `ParseError` if an argument fails to parse or the closing `)` is
/// missing.
fn parse_call<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if check(tokens, TokenKind::Identifier) {
        let mut lookahead = tokens.clone();
        lookahead.next();

        if check(&mut lookahead, TokenKind::LeftParen) {
            let callee = expect(tokens, TokenKind::Identifier, "Expect function name.")?;
            tokens.next();

            let depth = nested(tokens, depth)?;
            let arguments = parse_comma_separated(tokens,
                                                  |tokens| parse_expression(tokens, depth),
                                                  TokenKind::RightParen,
                                                  "Expect ')' after function call arguments.")?;

            return Ok(Expr::FunctionCall { name: callee.lexeme.clone(),
                                           arguments,
                                           line: callee.line });
        }
    }

    parse_primary(tokens, depth)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include
/// integer literals, variable references and parenthesized expressions.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | "(" expression ")"
///              | IDENTIFIER
/// ```
/// # Errors
/// - `ParseError::ExpectedExpression` if the next token cannot start an
///   expression.
/// - `ParseError::Expected` if a parenthesized group is not closed.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(&token) = tokens.peek() else {
        let (found, line) = describe_next(tokens);
        return Err(ParseError::ExpectedExpression { found, line });
    };

    match token.kind {
        TokenKind::Number => {
            let value = token.literal
                             .ok_or_else(|| ParseError::ExpectedExpression { found: token.describe(),
                                                                             line:  token.line, })?;
            tokens.next();
            Ok(Expr::Number { value,
                              line: token.line })
        },
        TokenKind::Identifier => {
            tokens.next();
            Ok(Expr::Variable { name: token.lexeme.clone(),
                                line: token.line, })
        },
        TokenKind::LeftParen => parse_grouping(tokens, depth),
        _ => Err(ParseError::ExpectedExpression { found: token.describe(),
                                                  line:  token.line, }),
    }
}

/// Parses a parenthesized expression: `"(" expression ")"`.
///
/// Parentheses only group; no node is created for them.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    tokens.next();
    let depth = nested(tokens, depth)?;
    let expr = parse_expression(tokens, depth)?;
    expect(tokens, TokenKind::RightParen, "Expect ')' after expression.")?;
    Ok(expr)
}
