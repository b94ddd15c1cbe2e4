//! Base tokenization
//!
//! Raw tokenization using the logos lexer library. This is where source strings become
//! lexeme streams. Characters the lexer does not recognize are dropped here.
//!
//! This is NOT a transformation: transformations operate on the stream this produces.

use crate::lexing::tokens_raw::Lexeme;
use logos::Logos;

/// Tokenize source text into raw lexemes paired with their byte ranges.
pub fn tokenize(source: &str) -> Vec<(Lexeme, logos::Span)> {
    let mut lexer = Lexeme::lexer(source);
    let mut lexemes = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(lexeme) = result {
            lexemes.push((lexeme, lexer.span()));
        }
    }

    lexemes
}
