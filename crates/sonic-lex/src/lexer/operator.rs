use super::Lexer;
use crate::classify;
use crate::token::{BuiltinOperator, Punctuation, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Extends greedily while the next char is in the operator class,
    /// then classifies the whole run. Works uniformly whether `mark`
    /// sits at the first unconsumed operator character or partway
    /// through one already consumed by the caller (the `/`-not-a-
    /// comment and `-`-not-numeric fallbacks).
    pub(crate) fn scan_operator_or_punctuation(&mut self, mark: usize) -> Token {
        while matches!(self.cursor.peek(), Some(c) if classify::is_operator_char(c)) {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(mark);
        let kind = classify_operator_text(&text);
        Token::new(kind, text)
    }
}

/// Postprocessing order: bare `&`/`!` first, then the
/// punctuation-and-operator overlap set, then the builtin operator
/// table, then `CustomOperator` as the catch-all.
fn classify_operator_text(text: &str) -> TokenKind {
    if text == "&" {
        return TokenKind::Ampersand;
    }
    if text == "!" {
        return TokenKind::Exclamation;
    }
    if let Some(punctuation) = Punctuation::from_overlap_spelling(text) {
        return TokenKind::Punctuation(punctuation);
    }
    if let Some(operator) = BuiltinOperator::from_spelling(text) {
        return TokenKind::BuiltinOperator(operator);
    }
    TokenKind::CustomOperator
}
