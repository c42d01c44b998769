//! Diagnostic rendering for a failed lex: the "near:" context line.
//!
//! This is the external collaborator the lexer itself does not own —
//! it turns a bare `(kind, position)` pair into something a user can
//! act on.

use sonic_lex::LexError;

/// A rendered diagnostic: the error itself plus the source line it
/// occurred on, for display.
pub struct Diagnostic<'a> {
    pub error: &'a LexError,
    pub line_number: usize,
    pub column: usize,
    pub near: &'a str,
}

impl<'a> Diagnostic<'a> {
    /// Builds a diagnostic from `source` and the error it produced.
    /// Slices `source[position .. next_newline_or_eof)` for the "near:"
    /// context line, end-exclusive, and computes a 1-based line/column
    /// by counting newlines up to `position`.
    pub fn new(source: &'a str, error: &'a LexError) -> Self {
        let chars: Vec<char> = source.chars().collect();
        let position = error.position.min(chars.len());

        let line_start = chars[..position]
            .iter()
            .rposition(|&c| c == '\n')
            .map(|idx| idx + 1)
            .unwrap_or(0);
        let line_number = chars[..position].iter().filter(|&&c| c == '\n').count() + 1;
        let column = position - line_start + 1;

        let line_end = chars[position..]
            .iter()
            .position(|&c| c == '\n')
            .map(|offset| position + offset)
            .unwrap_or(chars.len());

        let near = &source[byte_offset(&chars, position)..byte_offset(&chars, line_end)];

        Self {
            error,
            line_number,
            column,
            near,
        }
    }
}

fn byte_offset(chars: &[char], char_index: usize) -> usize {
    chars[..char_index].iter().map(|c| c.len_utf8()).sum()
}

impl std::fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "error: {} at {}:{}",
            self.error.kind, self.line_number, self.column
        )?;
        write!(f, "near: {}", self.near)
    }
}
