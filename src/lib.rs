//! # reloaded
//!
//! Directive-driven cleanup of loosely formatted English text.
//!
//! Text goes in as one string and comes out as one string:
//!
//!     it (cap) was a amazing DAY (low) !   ->   It was an amazing day!
//!
//! File Layout
//!
//!     src/lexing        logos lexer and the transformations that build semantic tokens
//!     src/processing    the single-pass processor (buffers, directives, quotes, spacing)
//!     src/transforms    word-level transforms: numbers, cases, articles
//!     src/formatting    rendering of quote spans and punctuation groups
//!     src/settings      layered configuration for the command-line tool
//!     src/error         errors of the outer layer (I/O, configuration)
//!
//! The processor never fails. Anything it cannot make sense of is kept as literal text.

pub mod error;
pub mod formatting;
pub mod lexing;
pub mod processing;
pub mod settings;
pub mod transforms;

pub use error::ReloadedError;
pub use lexing::{tokenize, Token};
pub use processing::process;
