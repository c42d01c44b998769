use super::Lexer;
use crate::classify;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Extends greedily while whitespace follows. Always succeeds:
    /// root dispatch only calls this once it has already peeked a
    /// whitespace character.
    pub(crate) fn scan_whitespace(&mut self) -> Token {
        let mark = self.cursor.mark();
        while matches!(self.cursor.peek(), Some(c) if classify::is_whitespace(c)) {
            self.cursor.advance();
        }
        Token::new(TokenKind::Whitespace, self.cursor.slice_from(mark))
    }
}
