//! Directive recognition
//!
//! Collapses a parenthesized span of shape `( keyword )` or `( keyword , [count] )` into a
//! single synthetic lexeme:
//!
//! - `Lexeme::Directive` when the keyword is one of hex, bin, up, low, cap;
//! - `Lexeme::Literal` holding the normalized text (`(invalid)`, `(foo, 2)`) otherwise.
//!
//! The count is either absent, or an optional `-` followed by a single alphanumeric run.
//! Parentheses that do not form this shape are left alone; word assembly drops them and
//! their content flows through as ordinary words and punctuation.

use crate::lexing::tokens_core::{Directive, DirectiveKind};
use crate::lexing::tokens_raw::Lexeme;
use std::ops::Range;

/// What was found between the parentheses.
#[derive(Debug, PartialEq)]
struct DirectiveShape {
    keyword: String,
    count_text: Option<String>,
    /// Number of lexemes consumed, parentheses included
    len: usize,
}

pub fn recognize_directives(lexemes: Vec<(Lexeme, Range<usize>)>) -> Vec<(Lexeme, Range<usize>)> {
    let mut result = Vec::with_capacity(lexemes.len());
    let mut i = 0;

    while i < lexemes.len() {
        if lexemes[i].0 == Lexeme::OpenParen {
            if let Some(shape) = match_shape(&lexemes[i..]) {
                let span = lexemes[i].1.start..lexemes[i + shape.len - 1].1.end;
                result.push((build_lexeme(&shape), span));
                i += shape.len;
                continue;
            }
        }
        result.push(lexemes[i].clone());
        i += 1;
    }

    result
}

fn build_lexeme(shape: &DirectiveShape) -> Lexeme {
    match DirectiveKind::from_keyword(&shape.keyword) {
        Some(kind) => {
            let directive = match &shape.count_text {
                None => Directive::new(kind),
                Some(count) => Directive::with_count_text(kind, count),
            };
            Lexeme::Directive(directive)
        }
        None => {
            tracing::debug!(keyword = %shape.keyword, "unknown directive kept as text");
            let literal = match shape.count_text.as_deref() {
                None => format!("({})", shape.keyword),
                Some("") => format!("({},)", shape.keyword),
                Some(count) => format!("({}, {})", shape.keyword, count),
            };
            Lexeme::Literal(literal)
        }
    }
}

fn match_shape(window: &[(Lexeme, Range<usize>)]) -> Option<DirectiveShape> {
    let at = |index: usize| window.get(index).map(|(lexeme, _)| lexeme);

    let keyword = match at(1)? {
        Lexeme::Alnum(keyword) => keyword.clone(),
        _ => return None,
    };

    match at(2)? {
        Lexeme::CloseParen => Some(DirectiveShape {
            keyword,
            count_text: None,
            len: 3,
        }),
        Lexeme::Punctuation(',') => match (at(3)?, at(4), at(5)) {
            (Lexeme::CloseParen, _, _) => Some(DirectiveShape {
                keyword,
                count_text: Some(String::new()),
                len: 4,
            }),
            (Lexeme::Alnum(count), Some(Lexeme::CloseParen), _) => Some(DirectiveShape {
                keyword,
                count_text: Some(count.clone()),
                len: 5,
            }),
            (Lexeme::Hyphen, Some(Lexeme::Alnum(count)), Some(Lexeme::CloseParen)) => {
                Some(DirectiveShape {
                    keyword,
                    count_text: Some(format!("-{}", count)),
                    len: 6,
                })
            }
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexing::base_tokenization::tokenize;

    fn recognize(source: &str) -> Vec<Lexeme> {
        recognize_directives(tokenize(source))
            .into_iter()
            .map(|(lexeme, _)| lexeme)
            .collect()
    }

    #[test]
    fn test_simple_directive() {
        assert_eq!(
            recognize("word (up)"),
            vec![
                Lexeme::Alnum("word".to_string()),
                Lexeme::Directive(Directive::new(DirectiveKind::Up)),
            ]
        );
    }

    #[test]
    fn test_directive_with_count_and_inner_whitespace() {
        assert_eq!(
            recognize("( low ,  3 )"),
            vec![Lexeme::Directive(Directive::with_count_text(
                DirectiveKind::Low,
                "3"
            ))]
        );
    }

    #[test]
    fn test_directive_attached_to_word() {
        let lexemes = recognize_directives(tokenize("1E(hex)"));
        assert_eq!(lexemes.len(), 2);
        assert_eq!(lexemes[1].0, Lexeme::Directive(Directive::new(DirectiveKind::Hex)));
        assert_eq!(lexemes[1].1, 2..7);
    }

    #[test]
    fn test_unparsable_and_negative_counts() {
        assert_eq!(
            recognize("(cap, many)"),
            vec![Lexeme::Directive(Directive::with_count_text(
                DirectiveKind::Cap,
                "many"
            ))]
        );
        assert_eq!(
            recognize("(up, -1)"),
            vec![Lexeme::Directive(Directive::with_count_text(
                DirectiveKind::Up,
                "-1"
            ))]
        );
        assert_eq!(
            recognize("(up,)"),
            vec![Lexeme::Directive(Directive::with_count_text(
                DirectiveKind::Up,
                ""
            ))]
        );
    }

    #[test]
    fn test_unknown_keyword_becomes_literal() {
        assert_eq!(
            recognize("(invalid)"),
            vec![Lexeme::Literal("(invalid)".to_string())]
        );
        assert_eq!(
            recognize("( foo,2 )"),
            vec![Lexeme::Literal("(foo, 2)".to_string())]
        );
    }

    #[test]
    fn test_other_parentheses_are_untouched() {
        assert_eq!(
            recognize("(two words)"),
            vec![
                Lexeme::OpenParen,
                Lexeme::Alnum("two".to_string()),
                Lexeme::Alnum("words".to_string()),
                Lexeme::CloseParen,
            ]
        );
        assert_eq!(
            recognize("(up"),
            vec![Lexeme::OpenParen, Lexeme::Alnum("up".to_string())]
        );
    }
}
