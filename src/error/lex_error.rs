/// Represents all errors that can occur during lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A character that does not start any token.
    #[error("Error on line {line}: Unrecognized character {character:?}.")]
    UnrecognizedCharacter {
        /// The offending source text (normally a single character).
        character: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// An integer literal does not fit into a signed 64-bit integer.
    #[error("Error on line {line}: Literal {lexeme} is too large.")]
    LiteralTooLarge {
        /// The digits of the literal.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
}
