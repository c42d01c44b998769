//! Rendering of a token stream to the two `--format` choices.
//!
//! `sonic-lex`'s `TokenKind` carries sub-enum payloads (`Keyword`,
//! `BuiltinOperator`, `Punctuation`) that are not part of the lexer's
//! own serialization story — this module owns turning them into a
//! display label, keeping that concern out of the library crate.

use sonic_lex::{BuiltinOperator, Keyword, Punctuation, Token, TokenKind};

/// A human-readable label for a token kind, e.g. `Keyword(let)` or
/// `BuiltinOperator(+=)`.
pub fn kind_label(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Comment => "Comment".to_string(),
        TokenKind::Whitespace => "Whitespace".to_string(),
        TokenKind::Identifier => "Identifier".to_string(),
        TokenKind::Keyword(k) => format!("Keyword({})", keyword_label(*k)),
        TokenKind::ImplicitParameterName => "ImplicitParameterName".to_string(),
        TokenKind::PropertyWrapperProjection => "PropertyWrapperProjection".to_string(),
        TokenKind::BinaryLiteral => "BinaryLiteral".to_string(),
        TokenKind::DecimalLiteral => "DecimalLiteral".to_string(),
        TokenKind::HexadecimalLiteral => "HexadecimalLiteral".to_string(),
        TokenKind::FloatLiteral => "FloatLiteral".to_string(),
        TokenKind::StaticStringLiteral => "StaticStringLiteral".to_string(),
        TokenKind::InterpolatedStringLiteral => "InterpolatedStringLiteral".to_string(),
        TokenKind::BuiltinOperator(op) => format!("BuiltinOperator({})", operator_label(*op)),
        TokenKind::CustomOperator => "CustomOperator".to_string(),
        TokenKind::Punctuation(p) => format!("Punctuation({})", punctuation_label(*p)),
        TokenKind::Ampersand => "Ampersand".to_string(),
        TokenKind::Exclamation => "Exclamation".to_string(),
    }
}

fn keyword_label(keyword: Keyword) -> &'static str {
    keyword.spelling()
}

fn operator_label(operator: BuiltinOperator) -> &'static str {
    operator.spelling()
}

fn punctuation_label(punctuation: Punctuation) -> &'static str {
    punctuation.spelling()
}

/// One `KIND "content"` line per token, content escaped for display
/// only (never altering the underlying data model).
pub fn render_human(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| format!("{} {:?}", kind_label(&token.kind), token.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A JSON array of `{kind, content}` objects.
pub fn render_json(tokens: &[Token]) -> serde_json::Result<String> {
    let values: Vec<serde_json::Value> = tokens
        .iter()
        .map(|token| {
            serde_json::json!({
                "kind": kind_label(&token.kind),
                "content": token.content,
            })
        })
        .collect();
    serde_json::to_string_pretty(&values)
}
