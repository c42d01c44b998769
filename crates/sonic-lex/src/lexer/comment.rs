use super::Lexer;
use crate::classify;
use crate::error::{LexError, LexErrorKind};
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Called with the leading `/` already consumed (`mark` points at
    /// it). Peeks the next character: `/` or `*` commit to a comment;
    /// anything else leaves the `/` consumed and reports "not a
    /// comment" so the caller can hand off to the operator scanner.
    pub(crate) fn try_scan_comment(&mut self, mark: usize) -> Result<Option<Token>, LexError> {
        match self.cursor.peek() {
            Some('/') => {
                self.cursor.advance();
                self.scan_line_comment_body();
                Ok(Some(Token::new(
                    TokenKind::Comment,
                    self.cursor.slice_from(mark),
                )))
            }
            Some('*') => {
                self.cursor.advance();
                self.scan_block_comment_body()?;
                Ok(Some(Token::new(
                    TokenKind::Comment,
                    self.cursor.slice_from(mark),
                )))
            }
            _ => Ok(None),
        }
    }

    fn scan_line_comment_body(&mut self) {
        loop {
            match self.cursor.peek() {
                None => return,
                Some(c) if classify::is_newline(c) => {
                    self.cursor.advance();
                    return;
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
    }

    /// Non-nesting block comment, entered with `/*` already consumed.
    /// `prev_was_star` starts `true` — it stands for the `*` that just
    /// closed the opening `/*` — so `/*/ ` terminates on the very next
    /// character instead of requiring a second `*/`.
    fn scan_block_comment_body(&mut self) -> Result<(), LexError> {
        let mut prev_was_star = true;
        loop {
            match self.cursor.advance() {
                None => return Err(self.error(LexErrorKind::UnterminatedComment)),
                Some('/') if prev_was_star => return Ok(()),
                Some('*') => prev_was_star = true,
                Some(_) => prev_was_star = false,
            }
        }
    }
}
