//! Word assembly
//!
//! Turns the lexeme stream into semantic tokens. An alphanumeric run absorbs every
//! directly following `joiner + alphanumeric` pair, where "directly" means the byte spans
//! touch. This keeps `don't`, `well-known` and `and/or` as one word while `' hello '`
//! yields two quote marks around a word.
//!
//! Apostrophes that were not absorbed become quote marks. Stray hyphens, slashes and
//! parentheses carry no meaning on their own and are dropped.

use crate::lexing::tokens_core::Token;
use crate::lexing::tokens_raw::Lexeme;
use std::ops::Range;

pub fn assemble_words(lexemes: Vec<(Lexeme, Range<usize>)>) -> Vec<(Token, Range<usize>)> {
    let mut tokens = Vec::with_capacity(lexemes.len());
    let mut i = 0;

    while i < lexemes.len() {
        let (lexeme, span) = &lexemes[i];
        match lexeme {
            Lexeme::Alnum(text) => {
                let mut word = text.clone();
                let mut end = span.end;
                i += 1;
                while let Some((joiner, run, run_end)) = joined_run(&lexemes[i..], end) {
                    word.push(joiner);
                    word.push_str(run);
                    end = run_end;
                    i += 2;
                }
                tokens.push((Token::Word(word), span.start..end));
                continue;
            }
            Lexeme::Apostrophe => tokens.push((Token::QuoteMark, span.clone())),
            Lexeme::Punctuation(mark) => tokens.push((Token::Punctuation(*mark), span.clone())),
            Lexeme::Directive(directive) => {
                tokens.push((Token::Directive(directive.clone()), span.clone()))
            }
            Lexeme::Literal(text) => tokens.push((Token::Word(text.clone()), span.clone())),
            Lexeme::Hyphen | Lexeme::Slash | Lexeme::OpenParen | Lexeme::CloseParen => {}
        }
        i += 1;
    }

    tokens
}

/// If `rest` starts with a joiner touching `end` followed by a touching alphanumeric run,
/// return the joiner, the run and the run's end offset.
fn joined_run(rest: &[(Lexeme, Range<usize>)], end: usize) -> Option<(char, &str, usize)> {
    let (joiner, joiner_span) = rest.first()?;
    let (next, next_span) = rest.get(1)?;
    let joiner = joiner.joiner_char()?;
    match next {
        Lexeme::Alnum(run) if joiner_span.start == end && next_span.start == joiner_span.end => {
            Some((joiner, run.as_str(), next_span.end))
        }
        _ => None,
    }
}
