//! Raw lexemes produced by the logos lexer
//!
//! These are character-level pieces: alphanumeric runs, joiners, parentheses and
//! punctuation. Whitespace is skipped, so adjacency between lexemes is recovered from
//! their byte spans. Two variants are synthetic: they are never produced by logos and
//! only appear after the directive recognition transformation.
use crate::lexing::tokens_core::Directive;
use logos::Logos;

#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Lexeme {
    #[regex(r"[0-9A-Za-z_]+", |lex| lex.slice().to_string())]
    Alnum(String),

    #[token("'")]
    Apostrophe,
    #[token("-")]
    Hyphen,
    #[token("/")]
    Slash,

    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,

    #[regex(r"[.,!?:;]", |lex| lex.slice().chars().next())]
    Punctuation(char),

    // Synthetic, see module docs
    Directive(Directive),
    Literal(String),
}

impl Lexeme {
    /// The character a joiner contributes when it glues two alphanumeric runs into a
    /// single word, `None` for lexemes that never join.
    pub fn joiner_char(&self) -> Option<char> {
        match self {
            Lexeme::Apostrophe => Some('\''),
            Lexeme::Hyphen => Some('-'),
            Lexeme::Slash => Some('/'),
            _ => None,
        }
    }
}
