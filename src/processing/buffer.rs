//! The processor's pending-word buffer.
//!
//! Words wait here until a quote mark, a punctuation group or the end of input flushes
//! them, so that directives can still rewrite them. While a quote is open the same slot
//! holds the quote capture instead: there is only ever one writable buffer.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveBuffer {
    /// Plain words waiting to be flushed to the output.
    Words(Vec<String>),
    /// Words captured since an opening quote mark.
    Quote(Vec<String>),
}

impl ActiveBuffer {
    pub fn is_quote(&self) -> bool {
        matches!(self, ActiveBuffer::Quote(_))
    }

    pub fn words(&self) -> &[String] {
        match self {
            ActiveBuffer::Words(words) | ActiveBuffer::Quote(words) => words,
        }
    }

    pub fn words_mut(&mut self) -> &mut Vec<String> {
        match self {
            ActiveBuffer::Words(words) | ActiveBuffer::Quote(words) => words,
        }
    }

    pub fn push(&mut self, word: impl Into<String>) {
        self.words_mut().push(word.into());
    }

    pub fn is_empty(&self) -> bool {
        self.words().is_empty()
    }
}

impl Default for ActiveBuffer {
    fn default() -> Self {
        ActiveBuffer::Words(Vec::new())
    }
}
