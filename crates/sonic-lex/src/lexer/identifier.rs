use super::Lexer;
use crate::classify;
use crate::token::{Keyword, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Extends greedily while identifier-body characters follow, then
    /// looks the text up against the reserved-word table.
    pub(crate) fn scan_identifier_or_keyword(&mut self) -> Token {
        let mark = self.cursor.mark();
        while matches!(self.cursor.peek(), Some(c) if classify::is_identifier_body(c)) {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(mark);
        let kind = match Keyword::from_spelling(&text) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier,
        };
        Token::new(kind, text)
    }
}
