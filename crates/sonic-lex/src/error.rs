//! Lexical error types.

use thiserror::Error;

/// The closed set of fatal lexical error kinds. All are terminal: the
/// scanner halts the moment one is detected, emitting no partial
/// token for the span under scan.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("unexpected escape sequence in string literal")]
    UnexpectedStringEscape,
    #[error("expected '{{' to open a unicode escape")]
    EscapedUnicodeInStringMissingOpeningBrace,
    #[error("expected at least one hex digit in unicode escape")]
    EscapedUnicodeInStringMissingHexValue,
    #[error("expected a hex digit or closing '}}' in unicode escape")]
    EscapedUnicodeInStringMissingHexValueOrBrace,
    #[error("expected an identifier to begin a string interpolation")]
    ExpectedIdentifierInStringInterpolation,
    #[error("expected an identifier character or closing ')' in string interpolation")]
    ExpectedIdentifierOrClosingBraceInStringInterpolation,
    #[error("newline in single-line string literal")]
    NewlineWithinString,
    #[error("unexpected character after '$'")]
    UnexpectedCharacterAfterDollarSign,
    #[error("failed to parse numeric literal")]
    FailedParsingNumeric,
    #[error("unrecognised character")]
    UnrecognisedCharacter,
}

/// A fatal lexical error: its kind, and the 0-based character position
/// of the offending character (or, for an error detected at end of
/// input, the position one past the last consumed character).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at position {position}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub position: usize,
}

impl LexError {
    pub(crate) fn new(kind: LexErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}
