use super::Lexer;
use crate::classify;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Tries binary, then hex, then decimal-or-float, in that order.
    /// `total_mark` is the position before any optional leading `-` was
    /// consumed, so the returned token's content picks the sign up for
    /// free — no string concatenation needed. Returns `None`, cursor
    /// untouched, if none of the three bodies match.
    pub(crate) fn try_scan_numeric_body(&mut self, total_mark: usize) -> Option<Token> {
        let kind = self
            .try_binary_literal()
            .or_else(|| self.try_hex_literal())
            .or_else(|| self.try_decimal_or_float_literal())?;
        Some(Token::new(kind, self.cursor.slice_from(total_mark)))
    }

    fn try_binary_literal(&mut self) -> Option<TokenKind> {
        let mark = self.cursor.mark();
        if self.cursor.peek() != Some('0') {
            return None;
        }
        self.cursor.advance();
        if self.cursor.peek() != Some('b') {
            self.cursor.reset(mark);
            return None;
        }
        self.cursor.advance();
        if !matches!(self.cursor.peek(), Some(c) if classify::is_binary_digit(c)) {
            self.cursor.reset(mark);
            return None;
        }
        while matches!(self.cursor.peek(), Some(c) if classify::is_binary_literal_char(c)) {
            self.cursor.advance();
        }
        Some(TokenKind::BinaryLiteral)
    }

    fn try_hex_literal(&mut self) -> Option<TokenKind> {
        let mark = self.cursor.mark();
        if self.cursor.peek() != Some('0') {
            return None;
        }
        self.cursor.advance();
        if self.cursor.peek() != Some('x') {
            self.cursor.reset(mark);
            return None;
        }
        self.cursor.advance();
        if !matches!(self.cursor.peek(), Some(c) if classify::is_hex_digit(c)) {
            self.cursor.reset(mark);
            return None;
        }
        while matches!(self.cursor.peek(), Some(c) if classify::is_hex_literal_char(c)) {
            self.cursor.advance();
        }
        Some(TokenKind::HexadecimalLiteral)
    }

    /// Unlike the binary/hex attempts this never rejects once a leading
    /// digit is seen: it either stays `DecimalLiteral` or transitions
    /// into the (infallible) float machine after a `.`.
    fn try_decimal_or_float_literal(&mut self) -> Option<TokenKind> {
        if !matches!(self.cursor.peek(), Some(c) if classify::is_decimal_digit(c)) {
            return None;
        }
        while matches!(self.cursor.peek(), Some(c) if classify::is_decimal_literal_char(c)) {
            self.cursor.advance();
        }
        if self.cursor.peek() == Some('.') {
            self.cursor.advance();
            self.finish_float_after_dot();
            return Some(TokenKind::FloatLiteral);
        }
        Some(TokenKind::DecimalLiteral)
    }

    /// The five-state float tail, entered right after the `.` is
    /// consumed. Every state stops without consuming on an unexpected
    /// character, so degenerate literals like `"0."` or `"1.2e"` are
    /// emitted rather than rejected.
    fn finish_float_after_dot(&mut self) {
        if !matches!(self.cursor.peek(), Some(c) if classify::is_decimal_digit(c)) {
            return;
        }
        self.cursor.advance();
        while matches!(self.cursor.peek(), Some(c) if classify::is_decimal_literal_char(c)) {
            self.cursor.advance();
        }

        match self.cursor.peek() {
            Some('e') | Some('E') => {
                self.cursor.advance();
            }
            _ => return,
        }

        match self.cursor.peek() {
            Some('+') | Some('-') => {
                self.cursor.advance();
            }
            Some(c) if classify::is_decimal_digit(c) => {}
            _ => return,
        }

        if !matches!(self.cursor.peek(), Some(c) if classify::is_decimal_digit(c)) {
            return;
        }
        self.cursor.advance();
        while matches!(self.cursor.peek(), Some(c) if classify::is_decimal_literal_char(c)) {
            self.cursor.advance();
        }
    }
}
