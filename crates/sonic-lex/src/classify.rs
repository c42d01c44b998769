//! ASCII character classification.
//!
//! Every predicate here operates on a single `char` and makes no claim
//! about what came before or after it; the scanner in [`crate::lexer`]
//! is responsible for sequencing. Classification is ASCII-only: no
//! Unicode general-category tables, matching the language's identifier
//! and operator grammar.

/// `' '`, `'\t'`, `'\r'`, `'\n'`.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// `'\r'` or `'\n'`.
pub fn is_newline(c: char) -> bool {
    matches!(c, '\r' | '\n')
}

pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

pub fn is_binary_digit(c: char) -> bool {
    matches!(c, '0' | '1')
}

/// `a-z`, `A-Z`, `_`.
pub fn is_identifier_head(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Identifier head or decimal digit.
pub fn is_identifier_body(c: char) -> bool {
    is_identifier_head(c) || is_decimal_digit(c)
}

/// `/ = - + ! * % < > & | ^ ~ ?`, plus `.` so that `..<` and `...` can
/// be produced by the same greedy operator scan that handles every
/// other multi-character operator. See `DESIGN.md` for why `.` is not
/// left as punctuation-only.
pub fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '/' | '=' | '-' | '+' | '!' | '*' | '%' | '<' | '>' | '&' | '|' | '^' | '~' | '?' | '.'
    )
}

/// `( ) { } [ ] . , : ; @ # \` = ! &`. `=`, `!`, `&`, `?`, `.` also
/// belong to [`is_operator_char`]; root dispatch tries the operator
/// class first, so only the chars unique to this class ever reach a
/// plain single-character `Punctuation` emission.
pub fn is_punctuation_char(c: char) -> bool {
    matches!(
        c,
        '(' | ')'
            | '{'
            | '}'
            | '['
            | ']'
            | '.'
            | ','
            | ':'
            | ';'
            | '@'
            | '#'
            | '`'
            | '='
            | '!'
            | '&'
    )
}

/// Decimal digit or `_`.
pub fn is_decimal_literal_char(c: char) -> bool {
    is_decimal_digit(c) || c == '_'
}

/// Hex digit or `_`.
pub fn is_hex_literal_char(c: char) -> bool {
    is_hex_digit(c) || c == '_'
}

/// Binary digit or `_`.
pub fn is_binary_literal_char(c: char) -> bool {
    is_binary_digit(c) || c == '_'
}
