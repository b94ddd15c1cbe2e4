//! Semantic tokens consumed by the processor
//!
//!     Tokens carry no whitespace. All spacing in the output is re-derived by the
//!     processor, never copied from the source.
//!
//!     Word:
//!         A run of ASCII letters, digits or underscores, optionally joined by single
//!         `-`, `'` or `/` characters each followed by more alphanumerics, so that
//!         `well-known`, `don't` and `and/or` stay whole.
//!
//!     Punctuation:
//!         One of `. , ! ? : ;`. Each mark is its own token; grouping happens later.
//!
//!     QuoteMark:
//!         An apostrophe that is not part of a contraction.
//!
//!     Directive:
//!         `(kind)` or `(kind, count)` where kind is one of hex, bin, up, low, cap.
use serde::Serialize;
use std::fmt;
use std::num::IntErrorKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Token {
    Word(String),
    Punctuation(char),
    QuoteMark,
    Directive(Directive),
}

impl Token {
    /// The text of a word token, `None` for every other kind.
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Token::Word(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(text) => write!(f, "{}", text),
            Token::Punctuation(mark) => write!(f, "{}", mark),
            Token::QuoteMark => write!(f, "'"),
            Token::Directive(directive) => write!(f, "{}", directive),
        }
    }
}

/// The closed set of directive keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectiveKind {
    Hex,
    Bin,
    Up,
    Low,
    Cap,
}

impl DirectiveKind {
    /// Keywords are matched case-sensitively: `(UP)` is plain text.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "hex" => Some(DirectiveKind::Hex),
            "bin" => Some(DirectiveKind::Bin),
            "up" => Some(DirectiveKind::Up),
            "low" => Some(DirectiveKind::Low),
            "cap" => Some(DirectiveKind::Cap),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            DirectiveKind::Hex => "hex",
            DirectiveKind::Bin => "bin",
            DirectiveKind::Up => "up",
            DirectiveKind::Low => "low",
            DirectiveKind::Cap => "cap",
        }
    }
}

/// A recognized `(kind)` / `(kind, count)` marker.
///
/// `count_text` keeps what was written after the comma (`None` when there was no comma)
/// so that a directive which does not fire can be written back out as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Directive {
    pub kind: DirectiveKind,
    pub count: usize,
    #[serde(skip)]
    pub count_text: Option<String>,
}

impl Directive {
    pub fn new(kind: DirectiveKind) -> Self {
        Directive {
            kind,
            count: 1,
            count_text: None,
        }
    }

    /// Build a directive from the raw text after the comma. Anything that is not a
    /// base-10 integer falls back to a count of 1; an integer too large for `usize`
    /// saturates, which covers every buffered word.
    pub fn with_count_text(kind: DirectiveKind, count_text: &str) -> Self {
        let count = match count_text.parse::<usize>() {
            Ok(count) => count,
            Err(err) if *err.kind() == IntErrorKind::PosOverflow => usize::MAX,
            Err(err) => {
                tracing::debug!(
                    directive = kind.keyword(),
                    count = count_text,
                    %err,
                    "unparsable directive count, defaulting to 1"
                );
                1
            }
        };
        Directive {
            kind,
            count,
            count_text: Some(count_text.to_string()),
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.count_text.as_deref() {
            None => write!(f, "({})", self.kind.keyword()),
            Some("") => write!(f, "({},)", self.kind.keyword()),
            Some(count) => write!(f, "({}, {})", self.kind.keyword(), count),
        }
    }
}
