use pretty_assertions::assert_eq;
use sonic_lex::{BuiltinOperator, Keyword, LexErrorKind, Punctuation, Token, TokenKind};

fn token(kind: TokenKind, content: &str) -> Token {
    Token {
        kind,
        content: content.into(),
    }
}

#[test]
fn test_scan_s1_let_binding_expect_full_token_stream() {
    let tokens = sonic_lex::lex("let a = 1").unwrap();
    assert_eq!(
        tokens,
        vec![
            token(TokenKind::Keyword(Keyword::Let), "let"),
            token(TokenKind::Whitespace, " "),
            token(TokenKind::Identifier, "a"),
            token(TokenKind::Whitespace, " "),
            token(TokenKind::Punctuation(Punctuation::Equal), "="),
            token(TokenKind::Whitespace, " "),
            token(TokenKind::DecimalLiteral, "1"),
        ]
    );
}

#[test]
fn test_scan_s2_compound_assign_with_negative_binary_expect_full_token_stream() {
    let tokens = sonic_lex::lex("x += -0b1_0").unwrap();
    assert_eq!(
        tokens,
        vec![
            token(TokenKind::Identifier, "x"),
            token(TokenKind::Whitespace, " "),
            token(
                TokenKind::BuiltinOperator(BuiltinOperator::PlusEq),
                "+="
            ),
            token(TokenKind::Whitespace, " "),
            token(TokenKind::BinaryLiteral, "-0b1_0"),
        ]
    );
}

#[test]
fn test_scan_s3_arrow_not_confused_with_negative_numeric_expect_full_token_stream() {
    let tokens = sonic_lex::lex("a -> b").unwrap();
    assert_eq!(
        tokens,
        vec![
            token(TokenKind::Identifier, "a"),
            token(TokenKind::Whitespace, " "),
            token(TokenKind::Punctuation(Punctuation::Arrow), "->"),
            token(TokenKind::Whitespace, " "),
            token(TokenKind::Identifier, "b"),
        ]
    );
}

#[test]
fn test_scan_s4_bare_ampersand_and_exclamation_expect_full_token_stream() {
    let tokens = sonic_lex::lex("&foo foo!").unwrap();
    assert_eq!(
        tokens,
        vec![
            token(TokenKind::Ampersand, "&"),
            token(TokenKind::Identifier, "foo"),
            token(TokenKind::Whitespace, " "),
            token(TokenKind::Identifier, "foo"),
            token(TokenKind::Exclamation, "!"),
        ]
    );
}

#[test]
fn test_scan_s5_interpolated_string_expect_single_token_spanning_whole_literal() {
    let source = r#""hi \(name) !""#;
    let tokens = sonic_lex::lex(source).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::InterpolatedStringLiteral);
    assert_eq!(tokens[0].content, source);
}

#[test]
fn test_scan_s6_slash_star_slash_expect_single_comment_token() {
    let tokens = sonic_lex::lex("/*/").unwrap();
    assert_eq!(tokens, vec![token(TokenKind::Comment, "/*/")]);
}

#[test]
fn test_scan_s7_unterminated_string_expect_failure_at_position_five() {
    let err = sonic_lex::lex(r#""oops"#).unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.position, 5);
}

#[test]
fn test_scan_s8_float_then_ellipsis_expect_full_token_stream() {
    let tokens = sonic_lex::lex("1.2e+3 ...").unwrap();
    assert_eq!(
        tokens,
        vec![
            token(TokenKind::FloatLiteral, "1.2e+3"),
            token(TokenKind::Whitespace, " "),
            token(
                TokenKind::BuiltinOperator(BuiltinOperator::Ellipsis),
                "..."
            ),
        ]
    );
}
