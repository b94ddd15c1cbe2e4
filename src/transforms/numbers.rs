//! Base conversion for the `hex` and `bin` directives.
//!
//! Literals are parsed as unsigned 64-bit integers. Anything that does not parse,
//! including values that overflow, is handed back unchanged.

use std::borrow::Cow;

/// Convert a base-16 literal (`1E`, `ff`) to its decimal form.
pub fn hex_to_decimal(word: &str) -> Cow<'_, str> {
    to_decimal(word, 16)
}

/// Convert a base-2 literal (`1010`) to its decimal form.
pub fn bin_to_decimal(word: &str) -> Cow<'_, str> {
    to_decimal(word, 2)
}

fn to_decimal(word: &str, radix: u32) -> Cow<'_, str> {
    let literal = word.trim();
    // from_str_radix tolerates a leading '+', a literal does not
    if literal.is_empty() || !literal.chars().all(|c| c.is_digit(radix)) {
        return Cow::Borrowed(word);
    }
    match u64::from_str_radix(literal, radix) {
        Ok(value) => Cow::Owned(value.to_string()),
        Err(_) => Cow::Borrowed(word),
    }
}
