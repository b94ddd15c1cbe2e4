//! Lookahead over tokens the processor has not consumed yet.

use crate::lexing::Token;

/// The next word token in `rest`, skipping directives, punctuation and quote marks.
pub fn next_word(rest: &[Token]) -> Option<&str> {
    rest.iter().find_map(Token::as_word)
}
