//! Root dispatch: the top-level `next_token` state machine described
//! in the character-classifier / token-scanner split. Each case below
//! corresponds, in order, to the ten root dispatch rules: whitespace,
//! `/` (comment-or-operator), identifier head, `$`, `-` (signed
//! numeric-or-operator), decimal digit, `"`, operator char, punctuation
//! char, and the unrecognised-character fallback.

use crate::classify;
use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind};
use crate::token::{Punctuation, Token, TokenKind};

pub(crate) struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(chars: &'a [char]) -> Self {
        Self {
            cursor: Cursor::new(chars),
        }
    }

    /// Builds a [`LexError`] at the current cursor position — the
    /// position of the offending character, or of EOF if nothing
    /// remains to read.
    pub(crate) fn error(&self, kind: LexErrorKind) -> LexError {
        LexError::new(kind, self.cursor.position())
    }

    pub(crate) fn next_token(&mut self) -> Result<Token, LexError> {
        let c = self
            .cursor
            .peek()
            .expect("next_token must not be called once the cursor is at EOF");

        if classify::is_whitespace(c) {
            return Ok(self.scan_whitespace());
        }

        if c == '/' {
            let mark = self.cursor.mark();
            self.cursor.advance();
            if let Some(token) = self.try_scan_comment(mark)? {
                return Ok(token);
            }
            return Ok(self.scan_operator_or_punctuation(mark));
        }

        if classify::is_identifier_head(c) {
            return Ok(self.scan_identifier_or_keyword());
        }

        if c == '$' {
            return self.scan_dollar();
        }

        if c == '-' {
            let mark = self.cursor.mark();
            self.cursor.advance();
            if let Some(token) = self.try_scan_numeric_body(mark) {
                return Ok(token);
            }
            self.cursor.reset(mark);
            return Ok(self.scan_operator_or_punctuation(mark));
        }

        if classify::is_decimal_digit(c) {
            let mark = self.cursor.mark();
            return self
                .try_scan_numeric_body(mark)
                .ok_or_else(|| self.error(LexErrorKind::FailedParsingNumeric));
        }

        if c == '"' {
            return self.scan_string();
        }

        if classify::is_operator_char(c) {
            let mark = self.cursor.mark();
            return Ok(self.scan_operator_or_punctuation(mark));
        }

        if classify::is_punctuation_char(c) {
            self.cursor.advance();
            let punctuation = Punctuation::from_single_char(c)
                .expect("is_punctuation_char implies from_single_char succeeds here");
            return Ok(Token::new(
                TokenKind::Punctuation(punctuation),
                c.to_string(),
            ));
        }

        Err(self.error(LexErrorKind::UnrecognisedCharacter))
    }
}
