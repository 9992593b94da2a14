use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{MAX_NESTING_DEPTH, ParseResult},
    },
};

/// Returns `true` if the next token has the given kind. Consumes nothing.
pub(in crate::interpreter::parser) fn check<'a, I>(tokens: &mut Peekable<I>, kind: TokenKind) -> bool
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().is_some_and(|token| token.kind == kind)
}

/// Returns the line of the next token, or 0 when the stream is exhausted.
pub(in crate::interpreter::parser) fn current_line<'a, I>(tokens: &mut Peekable<I>) -> usize
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().map_or(0, |token| token.line)
}

/// Describes the next token for error messages.
pub(in crate::interpreter::parser) fn describe_next<'a, I>(tokens: &mut Peekable<I>)
                                                           -> (String, usize)
    where I: Iterator<Item = &'a Token>
{
    tokens.peek()
          .map_or_else(|| ("end of input".to_string(), 0),
                       |token| (token.describe(), token.line))
}

/// Consumes the next token if it has the expected kind.
///
/// This is the single reporting path for structural violations: a missing
/// `)`, `=`, `{` or `}` all surface here with the caller's `message`.
///
/// # Errors
/// Returns `ParseError::Expected` carrying `message` when the next token has a
/// different kind or the stream is exhausted. Nothing is consumed then.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind,
                                                    message: &'static str)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    if let Some(&token) = tokens.peek()
       && token.kind == kind
    {
        tokens.next();
        return Ok(token);
    }

    let (found, line) = describe_next(tokens);
    Err(ParseError::Expected { message, found, line })
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns `ParseError::Expected` with `message` if the next token is not an
/// identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              message: &'static str)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::Identifier, message).map(|token| token.lexeme.clone())
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by parameter lists and call argument lists. It
/// repeatedly calls `parse_item` to parse one element, expecting either a
/// comma, to continue the list, or the closing token, to end it. An
/// immediately encountered closing token produces an empty list. A trailing
/// comma is rejected because `parse_item` then sees the closing token.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the opening token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token kind that terminates the list.
/// - `message`: Reported when neither `,` nor `closing` follows an item.
///
/// # Returns
/// A vector of parsed items. The closing token is consumed.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: TokenKind,
    message: &'static str)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut items = Vec::new();
    if check(tokens, closing) {
        tokens.next();
        return Ok(items);
    }

    loop {
        items.push(parse_item(tokens)?);
        if check(tokens, TokenKind::Comma) {
            tokens.next();
            continue;
        }
        expect(tokens, closing, message)?;
        break;
    }

    Ok(items)
}

/// Enters one more level of nesting.
///
/// # Returns
/// The depth for the nested construct.
///
/// # Errors
/// `ParseError::NestingTooDeep` once `depth` reaches [`MAX_NESTING_DEPTH`].
pub(in crate::interpreter::parser) fn nested<'a, I>(tokens: &mut Peekable<I>,
                                                    depth: usize)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a Token>
{
    if depth >= MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                line:  current_line(tokens), });
    }
    Ok(depth + 1)
}
