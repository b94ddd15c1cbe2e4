//! Lexer
//!
//! This module orchestrates the tokenization pipeline.
//!
//! The pipeline consists of:
//! 1. Core tokenization using the logos lexer into raw lexemes with spans
//!    ./base_tokenization.rs
//! 2. Directive recognition, so that `(up, 2)` becomes one lexeme
//!    ./transformations/directives.rs
//! 3. Word assembly, fusing contractions and compounds and classifying apostrophes
//!    ./transformations/word_assembly.rs
//!
//! Tokenization is total: unrecognized characters are dropped at step 1 and malformed
//! parenthesized spans decompose into plain words at steps 2 and 3. Whitespace never
//! reaches the token stream.

pub mod base_tokenization;
pub mod tokens_core;
pub mod tokens_raw;
pub mod transformations;

pub use tokens_core::{Directive, DirectiveKind, Token};
pub use tokens_raw::Lexeme;

use std::ops::Range;

/// Tokenize source text into semantic tokens paired with their source byte ranges.
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, Range<usize>)> {
    let lexemes = base_tokenization::tokenize(source);
    let lexemes = transformations::recognize_directives(lexemes);
    transformations::assemble_words(lexemes)
}

/// Tokenize source text into semantic tokens.
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with_spans(source)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Token {
        Token::Word(text.to_string())
    }

    #[test]
    fn test_sentence_pattern() {
        assert_eq!(
            tokenize("it (cap) was a amazing DAY (low) !"),
            vec![
                word("it"),
                Token::Directive(Directive::new(DirectiveKind::Cap)),
                word("was"),
                word("a"),
                word("amazing"),
                word("DAY"),
                Token::Directive(Directive::new(DirectiveKind::Low)),
                Token::Punctuation('!'),
            ]
        );
    }

    #[test]
    fn test_quote_pattern() {
        assert_eq!(
            tokenize("said: ' don't (up, 2) '"),
            vec![
                word("said"),
                Token::Punctuation(':'),
                Token::QuoteMark,
                word("don't"),
                Token::Directive(Directive::with_count_text(DirectiveKind::Up, "2")),
                Token::QuoteMark,
            ]
        );
    }

    #[test]
    fn test_invalid_directive_pattern() {
        assert_eq!(
            tokenize("word (invalid) test"),
            vec![word("word"), word("(invalid)"), word("test")]
        );
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(tokenize(" \n\t  "), vec![]);
    }

    #[test]
    fn test_spans_point_into_source() {
        let source = "FF (hex) ,";
        let tokens = tokenize_with_spans(source);
        assert_eq!(&source[tokens[0].1.clone()], "FF");
        assert_eq!(&source[tokens[1].1.clone()], "(hex)");
        assert_eq!(&source[tokens[2].1.clone()], ",");
    }
}
