//! Word-level transforms
//!
//! Pure functions over single words, used by the processor when directives fire and when
//! buffered words are flushed. None of them can fail: input they cannot handle is
//! returned unchanged.

pub mod article;
pub mod cases;
pub mod numbers;

pub use article::fix_article;
pub use cases::Case;
pub use numbers::{bin_to_decimal, hex_to_decimal};
