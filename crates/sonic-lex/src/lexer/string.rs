use super::Lexer;
use crate::classify;
use crate::error::{LexError, LexErrorKind};
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Entered with the cursor on the opening `"`. `interpolated` is
    /// set the first time a `\(identifier)` segment closes; it decides
    /// the final token kind.
    pub(crate) fn scan_string(&mut self) -> Result<Token, LexError> {
        let mark = self.cursor.mark();
        self.cursor.advance();
        let mut interpolated = false;

        loop {
            match self.cursor.peek() {
                None => return Err(self.error(LexErrorKind::UnterminatedString)),
                Some('"') => {
                    self.cursor.advance();
                    break;
                }
                Some(c) if classify::is_newline(c) => {
                    return Err(self.error(LexErrorKind::NewlineWithinString));
                }
                Some('\\') => {
                    self.cursor.advance();
                    self.scan_string_escape(&mut interpolated)?;
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }

        let kind = if interpolated {
            TokenKind::InterpolatedStringLiteral
        } else {
            TokenKind::StaticStringLiteral
        };
        Ok(Token::new(kind, self.cursor.slice_from(mark)))
    }

    fn scan_string_escape(&mut self, interpolated: &mut bool) -> Result<(), LexError> {
        match self.cursor.peek() {
            Some('0') | Some('\\') | Some('t') | Some('n') | Some('r') | Some('"') | Some('\'') => {
                self.cursor.advance();
                Ok(())
            }
            Some('u') => {
                self.cursor.advance();
                self.scan_unicode_escape()
            }
            Some('(') => {
                self.cursor.advance();
                self.scan_interpolation(interpolated)
            }
            _ => Err(self.error(LexErrorKind::UnexpectedStringEscape)),
        }
    }

    fn scan_unicode_escape(&mut self) -> Result<(), LexError> {
        if self.cursor.peek() != Some('{') {
            return Err(self.error(LexErrorKind::EscapedUnicodeInStringMissingOpeningBrace));
        }
        self.cursor.advance();

        if !matches!(self.cursor.peek(), Some(c) if classify::is_hex_digit(c)) {
            return Err(self.error(LexErrorKind::EscapedUnicodeInStringMissingHexValue));
        }
        self.cursor.advance();

        loop {
            match self.cursor.peek() {
                Some(c) if classify::is_hex_digit(c) => {
                    self.cursor.advance();
                }
                Some('}') => {
                    self.cursor.advance();
                    return Ok(());
                }
                _ => {
                    return Err(self.error(LexErrorKind::EscapedUnicodeInStringMissingHexValueOrBrace));
                }
            }
        }
    }

    fn scan_interpolation(&mut self, interpolated: &mut bool) -> Result<(), LexError> {
        if !matches!(self.cursor.peek(), Some(c) if classify::is_identifier_head(c)) {
            return Err(self.error(LexErrorKind::ExpectedIdentifierInStringInterpolation));
        }
        self.cursor.advance();

        loop {
            match self.cursor.peek() {
                Some(c) if classify::is_identifier_body(c) => {
                    self.cursor.advance();
                }
                Some(')') => {
                    self.cursor.advance();
                    *interpolated = true;
                    return Ok(());
                }
                _ => {
                    return Err(self.error(
                        LexErrorKind::ExpectedIdentifierOrClosingBraceInStringInterpolation,
                    ));
                }
            }
        }
    }
}
