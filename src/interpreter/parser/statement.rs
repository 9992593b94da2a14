use std::iter::Peekable;

use crate::{
    ast::{FunctionDef, Statement},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{
                check, current_line, expect, nested, parse_comma_separated, parse_identifier,
            },
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a function definition, introduced by `def`.
/// - an assignment, when an identifier is directly followed by `=`.
/// - an expression used as a statement.
///
/// Parsing is attempted in that order; the first matching construct is
/// returned. If none match, the input is parsed as an expression statement.
///
/// Grammar: `statement := definition | assignment | expression`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Nesting depth; a function body is one level below its `def`.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(statement) = parse_definition(tokens, depth)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_assignment(tokens, depth)? {
        return Ok(statement);
    }

    let line = current_line(tokens);
    let expr = parse_expression(tokens, depth)?;

    Ok(Statement::Expression { expr, line })
}

/// Parses a function definition.
///
/// ```text
///     definition := "def" IDENTIFIER "(" (IDENTIFIER ("," IDENTIFIER)*)? ")" "=" "{" statement "}"
/// ```
///
/// The body is exactly one statement. If the next token is not `def`, this
/// function returns `Ok(None)` and does not consume any input.
///
/// # Errors
/// Returns a `ParseError` if the name, the parameter list, the `=` or either
/// brace is missing or malformed, or if the body fails to parse.
fn parse_definition<'a, I>(tokens: &mut Peekable<I>,
                           depth: usize)
                           -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a Token> + Clone
{
    if !check(tokens, TokenKind::Def) {
        return Ok(None);
    }
    let line = current_line(tokens);
    tokens.next();

    let name = parse_identifier(tokens, "Expect function name after 'def'.")?;
    expect(tokens, TokenKind::LeftParen, "Expect '(' after function name.")?;

    let params = parse_comma_separated(tokens,
                                       |tokens| parse_identifier(tokens, "Expect parameter name."),
                                       TokenKind::RightParen,
                                       "Expect ')' after function parameters.")?;

    expect(tokens, TokenKind::Assign, "Expect '=' after function parameters.")?;
    expect(tokens, TokenKind::LeftBrace, "Expect '{' before function body.")?;
    let depth = nested(tokens, depth)?;
    let body = parse_statement(tokens, depth)?;
    expect(tokens, TokenKind::RightBrace, "Expect '}' after function body.")?;

    Ok(Some(Statement::Definition(FunctionDef { name,
                                                params,
                                                body: Box::new(body),
                                                line })))
}

/// Parses an assignment statement: `<identifier> = <expression>`.
///
/// The function performs a limited lookahead: only if the next token is an
/// identifier and the token after it is `=` is an assignment parsed.
/// Otherwise it returns `Ok(None)` without consuming tokens, and the caller
/// falls through to expression parsing (where `f(...)` becomes a call and a
/// bare name a variable reference).
///
/// # Errors
/// Returns a `ParseError` if the assigned expression fails to parse.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>,
                           depth: usize)
                           -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a Token> + Clone
{
    if !check(tokens, TokenKind::Identifier) {
        return Ok(None);
    }

    let mut lookahead = tokens.clone();
    lookahead.next();
    if !check(&mut lookahead, TokenKind::Assign) {
        return Ok(None);
    }

    let target = expect(tokens, TokenKind::Identifier, "Expect variable name.")?;
    expect(tokens, TokenKind::Assign, "Expect '=' after variable name.")?;
    let value = parse_expression(tokens, depth)?;

    Ok(Some(Statement::Assignment { name: target.lexeme.clone(),
                                    value,
                                    line: target.line }))
}
