//! Transformations over the raw lexeme stream
//!
//! Each transformation takes the full stream and returns a new one. They run in order:
//!
//! 1. [directives]: collapse `(kind)` / `(kind, count)` spans into synthetic lexemes.
//! 2. [word_assembly]: fuse joined words and produce the semantic [Token] stream.
//!
//! [Token]: crate::lexing::Token

pub mod directives;
pub mod word_assembly;

pub use directives::recognize_directives;
pub use word_assembly::assemble_words;
