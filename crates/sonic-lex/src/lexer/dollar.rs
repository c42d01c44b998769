use super::Lexer;
use crate::classify;
use crate::error::LexErrorKind;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Called with the cursor sitting on `$`. Tries a run of decimal
    /// digits first (`$0`, `$12`) for an implicit closure parameter
    /// name, then falls back to a run of identifier-body characters
    /// (`$foo`) for a property-wrapper projection. Neither run may be
    /// empty, or the character right after `$` is reported as invalid.
    pub(crate) fn scan_dollar(&mut self) -> Result<Token, crate::error::LexError> {
        let total_mark = self.cursor.mark();
        self.cursor.advance();
        let digits_mark = self.cursor.mark();

        while matches!(self.cursor.peek(), Some(c) if classify::is_decimal_digit(c)) {
            self.cursor.advance();
        }
        if self.cursor.position() > digits_mark {
            return Ok(Token::new(
                TokenKind::ImplicitParameterName,
                self.cursor.slice_from(total_mark),
            ));
        }

        self.cursor.reset(digits_mark);
        while matches!(self.cursor.peek(), Some(c) if classify::is_identifier_body(c)) {
            self.cursor.advance();
        }
        if self.cursor.position() > digits_mark {
            return Ok(Token::new(
                TokenKind::PropertyWrapperProjection,
                self.cursor.slice_from(total_mark),
            ));
        }

        Err(self.error(LexErrorKind::UnexpectedCharacterAfterDollarSign))
    }
}
