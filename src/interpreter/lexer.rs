use logos::Logos;

use crate::error::LexError;

/// The kind of a lexical token.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized token kinds in the language. Kinds carry
/// no data; the source text and decoded literal live on [`Token`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Number,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Multiply,
    /// `/`
    #[token("/")]
    Divide,
    /// `**`
    #[token("**")]
    Exponent,
    /// `=`
    #[token("=")]
    Assign,
    /// `==`
    #[token("==")]
    Equals,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `def`
    #[token("def")]
    Def,
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// Line breaks advance the line counter and are otherwise skipped.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
    /// End of input. Never produced by logos; appended by [`scan`].
    Eof,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Debug, Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A token together with the text it was read from.
///
/// Tokens are created by [`scan`] and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token kind.
    pub kind:    TokenKind,
    /// The exact source substring. Empty for [`TokenKind::Eof`].
    pub lexeme:  String,
    /// The decoded value of a [`TokenKind::Number`] token.
    pub literal: Option<i64>,
    /// The 1-based source line the token starts on.
    pub line:    usize,
}

impl Token {
    /// Creates the end-of-input marker for the given line.
    #[must_use]
    pub const fn eof(line: usize) -> Self {
        Self { kind: TokenKind::Eof,
               lexeme: String::new(),
               literal: None,
               line }
    }

    /// Returns a human-readable description of the token, used in error
    /// messages.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::lexer::scan;
    ///
    /// let tokens = scan("x 12 +").unwrap();
    /// assert_eq!(tokens[0].describe(), "identifier 'x'");
    /// assert_eq!(tokens[1].describe(), "number 12");
    /// assert_eq!(tokens[2].describe(), "'+'");
    /// assert_eq!(tokens[3].describe(), "end of input");
    /// ```
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Number => format!("number {}", self.lexeme),
            TokenKind::Identifier => format!("identifier '{}'", self.lexeme),
            TokenKind::Def => "keyword 'def'".to_string(),
            TokenKind::Eof => "end of input".to_string(),
            _ => format!("'{}'", self.lexeme),
        }
    }
}

/// Converts source text into a sequence of tokens terminated by an EOF token.
///
/// Whitespace (spaces, tabs, carriage returns and newlines) separates tokens
/// but is never emitted. Two-character operators (`**`, `==`) are matched
/// greedily before their one-character prefixes.
///
/// # Errors
/// - `LexError::UnrecognizedCharacter` for any character that starts no token.
/// - `LexError::LiteralTooLarge` for digit runs that overflow an `i64`.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::{TokenKind, scan};
///
/// let kinds: Vec<_> = scan("2**x").unwrap().into_iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Number, TokenKind::Exponent, TokenKind::Identifier, TokenKind::Eof]);
///
/// assert!(scan("1 $ 2").is_err());
/// ```
pub fn scan(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(kind) = lexer.next() {
        let line = lexer.extras.line;
        let lexeme = lexer.slice();

        let Ok(kind) = kind else {
            return Err(LexError::UnrecognizedCharacter { character: lexeme.to_string(),
                                                         line });
        };

        let literal = match kind {
            TokenKind::Number => {
                Some(lexeme.parse::<i64>()
                           .map_err(|_| LexError::LiteralTooLarge { lexeme: lexeme.to_string(),
                                                                    line })?)
            },
            _ => None,
        };

        tokens.push(Token { kind,
                            lexeme: lexeme.to_string(),
                            literal,
                            line });
    }

    tokens.push(Token::eof(lexer.extras.line));
    Ok(tokens)
}
