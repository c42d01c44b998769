//! Lexical analyzer for the Sonic language: a single pass from raw
//! source text to an ordered vector of [`Token`]s, or the first
//! [`LexError`] encountered.

mod classify;
mod cursor;
mod error;
mod lexer;
mod token;

pub use error::{LexError, LexErrorKind};
pub use token::{BuiltinOperator, Keyword, Punctuation, Token, TokenKind};

use lexer::Lexer;

/// Lexes `source` into its token sequence.
///
/// On success, concatenating every token's `content` reproduces
/// `source` exactly (invariant 1). On failure, the returned error
/// carries the 0-based character position of the offending input; no
/// partial token for the span under scan is included in the (dropped)
/// output.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let chars: Vec<char> = source.chars().collect();
    let mut lexer = Lexer::new(&chars);
    let mut tokens = Vec::new();

    while !lexer.cursor.is_eof() {
        tokens.push(lexer.next_token()?);
    }

    Ok(tokens)
}
