use reckon::{
    error::LexError,
    interpreter::lexer::{TokenKind, scan},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    scan(source).unwrap().into_iter().map(|token| token.kind).collect()
}

#[test]
fn scans_every_operator_and_delimiter() {
    use TokenKind::*;

    assert_eq!(kinds("+ - * / ** = == ( ) { } ,"),
               [Plus, Minus, Multiply, Divide, Exponent, Assign, Equals, LeftParen, RightParen,
                LeftBrace, RightBrace, Comma, Eof]);
}

#[test]
fn two_character_operators_are_greedy() {
    use TokenKind::*;

    assert_eq!(kinds("2***3"), [Number, Exponent, Multiply, Number, Eof]);
    assert_eq!(kinds("a===b"), [Identifier, Equals, Assign, Identifier, Eof]);
}

#[test]
fn def_is_a_keyword_but_longer_words_are_identifiers() {
    use TokenKind::*;

    assert_eq!(kinds("def define _def def2"), [Def, Identifier, Identifier, Identifier, Eof]);
}

#[test]
fn numbers_carry_their_literal() {
    let tokens = scan("0 42 007").unwrap();

    assert_eq!(tokens[0].literal, Some(0));
    assert_eq!(tokens[1].literal, Some(42));
    assert_eq!(tokens[2].literal, Some(7));
    assert_eq!(tokens[2].lexeme, "007");
}

#[test]
fn identifiers_keep_their_lexeme() {
    let tokens = scan("snake_case2").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "snake_case2");
    assert_eq!(tokens[0].literal, None);
}

#[test]
fn input_always_ends_with_a_single_eof() {
    for source in ["", "   \n\t ", "x = 1"] {
        let tokens = scan(source).unwrap();
        let eofs = tokens.iter().filter(|token| token.kind == TokenKind::Eof).count();

        assert_eq!(eofs, 1);
        assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::Eof));
        assert_eq!(tokens.last().map(|token| token.lexeme.as_str()), Some(""));
    }
}

#[test]
fn tracks_line_numbers() {
    let tokens = scan("x\n\ny\r\n  z").unwrap();

    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].line, 3);
    assert_eq!(tokens[2].line, 4);
    assert_eq!(tokens[3].line, 4);
}

#[test]
fn unrecognized_character_is_error() {
    assert_eq!(scan("1 +\n 2 $ 3"),
               Err(LexError::UnrecognizedCharacter { character: "$".to_string(),
                                                     line:      2, }));
    assert!(scan("x = 1.5").is_err());
    assert!(scan("# comment").is_err());
}

#[test]
fn oversized_literal_is_error() {
    assert!(scan("9223372036854775807").is_ok());
    assert_eq!(scan("9223372036854775808"),
               Err(LexError::LiteralTooLarge { lexeme: "9223372036854775808".to_string(),
                                               line:   1, }));
}
