//! Text processor
//!
//!     The processor consumes the token stream left to right in a single pass and builds
//!     the output string. Each call works on its own [Processor] value; nothing survives
//!     between calls.
//!
//! State
//!
//!     - position in the token stream
//!     - the active buffer: pending plain words, or the capture of an open quote
//!     - the output accumulator
//!     - whether the previously processed token was a word
//!
//! Rules
//!
//!     Quote mark:
//!         Flush pending words, then toggle. Opening starts an empty capture. Closing
//!         corrects articles inside the capture, renders it as one quoted phrase and makes
//!         that phrase the only pending word, so a directive right after the quote still
//!         applies to the whole phrase.
//!
//!     Directive:
//!         Fires only when the active buffer has words AND the previous token was a word.
//!         Otherwise it is kept as literal text. A literal directive is not a word, so in
//!         `word (up) (low) (cap)` only `(up)` fires.
//!
//!     Punctuation group:
//!         Consecutive marks are consumed together. Inside a quote the group sticks to the
//!         last captured word. Outside, pending words are flushed and the group is written
//!         directly after the previous word, followed by one space.
//!
//!     Word:
//!         Appended to the active buffer.
//!
//!     End of input:
//!         An unterminated quote is folded back into plain words, then everything pending
//!         is flushed and the output is trimmed.
//!
//! Flushing applies article correction with one word of lookahead: the next pending word,
//! or for the last pending word the next word token still ahead in the stream.

pub mod buffer;
pub mod lookahead;

pub use buffer::ActiveBuffer;

use crate::formatting;
use crate::lexing::{tokenize, Directive, DirectiveKind, Token};
use crate::transforms::{bin_to_decimal, fix_article, hex_to_decimal, Case};
use std::borrow::Cow;

/// Transform `input` and return the cleaned-up text.
pub fn process(input: &str) -> String {
    let tokens = tokenize(input);
    process_tokens(&tokens)
}

/// Run the processor over an already tokenized stream.
pub fn process_tokens(tokens: &[Token]) -> String {
    Processor::new(tokens).run()
}

/// Single-pass processor over a token slice.
#[derive(Debug)]
pub struct Processor<'t> {
    tokens: &'t [Token],
    pos: usize,
    output: String,
    active: ActiveBuffer,
    last_was_word: bool,
}

impl<'t> Processor<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Processor {
            tokens,
            pos: 0,
            output: String::new(),
            active: ActiveBuffer::default(),
            last_was_word: false,
        }
    }

    /// Consume every token and return the trimmed output.
    pub fn run(mut self) -> String {
        let tokens = self.tokens;

        while let Some(token) = tokens.get(self.pos) {
            match token {
                Token::QuoteMark => {
                    self.handle_quote();
                    self.pos += 1;
                }
                Token::Directive(directive) => {
                    self.handle_directive(directive);
                    self.pos += 1;
                }
                // advances past the whole group itself
                Token::Punctuation(_) => self.handle_punctuation(),
                Token::Word(word) => {
                    self.active.push(word.as_str());
                    self.last_was_word = true;
                    self.pos += 1;
                }
            }
        }

        self.active = match std::mem::take(&mut self.active) {
            ActiveBuffer::Quote(mut words) => {
                tracing::debug!(words = words.len(), "unterminated quote kept as text");
                correct_articles_within(&mut words);
                ActiveBuffer::Words(formatting::unterminated_quote(words))
            }
            pending => pending,
        };
        self.flush();

        self.output.trim().to_string()
    }

    fn handle_quote(&mut self) {
        self.flush();
        match std::mem::take(&mut self.active) {
            ActiveBuffer::Words(_) => {
                self.active = ActiveBuffer::Quote(Vec::new());
                self.last_was_word = false;
            }
            ActiveBuffer::Quote(mut words) => {
                correct_articles_within(&mut words);
                self.active = ActiveBuffer::Words(vec![formatting::format_quote(&words)]);
                self.last_was_word = true;
            }
        }
    }

    fn handle_directive(&mut self, directive: &Directive) {
        if self.last_was_word && !self.active.is_empty() {
            apply_directive(directive, self.active.words_mut());
        } else {
            tracing::debug!(%directive, "directive has no target, kept as text");
            self.active.push(directive.to_string());
        }
        self.last_was_word = false;
    }

    fn handle_punctuation(&mut self) {
        let start = self.pos;
        while let Some(Token::Punctuation(_)) = self.tokens.get(self.pos) {
            self.pos += 1;
        }
        let marks = self.tokens[start..self.pos].iter().filter_map(|token| match token {
            Token::Punctuation(mark) => Some(*mark),
            _ => None,
        });
        let group = formatting::format_punctuation(marks);
        self.last_was_word = false;

        if self.active.is_quote() {
            let words = self.active.words_mut();
            match words.last_mut() {
                Some(last) => last.push_str(&group),
                None => words.push(group),
            }
            return;
        }

        self.flush();
        if self.output.ends_with(' ') {
            self.output.pop();
        }
        self.output.push_str(&group);
        self.output.push(' ');
    }

    /// Move pending plain words to the output. A quote capture is never flushed.
    fn flush(&mut self) {
        let words = match &mut self.active {
            ActiveBuffer::Words(words) if !words.is_empty() => std::mem::take(words),
            _ => return,
        };
        tracing::trace!(words = words.len(), "flushing word buffer");

        let upcoming = lookahead::next_word(&self.tokens[self.pos..]);
        for (i, word) in words.iter().enumerate() {
            let next = words
                .get(i + 1)
                .map(String::as_str)
                .or(upcoming)
                .unwrap_or("");
            let word = fix_article(word, next);
            if !self.output.is_empty() && !self.output.ends_with(' ') {
                self.output.push(' ');
            }
            self.output.push_str(&word);
        }
    }
}

/// Apply a directive that fired to the tail of `words`.
fn apply_directive(directive: &Directive, words: &mut [String]) {
    match directive.kind {
        DirectiveKind::Hex => convert_last(words, hex_to_decimal),
        DirectiveKind::Bin => convert_last(words, bin_to_decimal),
        DirectiveKind::Up => Case::Upper.apply_to_tail(words, directive.count),
        DirectiveKind::Low => Case::Lower.apply_to_tail(words, directive.count),
        DirectiveKind::Cap => Case::Capitalized.apply_to_tail(words, directive.count),
    }
}

fn convert_last(words: &mut [String], convert: fn(&str) -> Cow<'_, str>) {
    if let Some(last) = words.last_mut() {
        let converted = convert(last).into_owned();
        *last = converted;
    }
}

/// Article correction inside a closed quote, looking only at the quote's own words.
fn correct_articles_within(words: &mut [String]) {
    for i in 1..words.len() {
        let corrected = fix_article(&words[i - 1], &words[i]).into_owned();
        words[i - 1] = corrected;
    }
}
