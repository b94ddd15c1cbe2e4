//! Rendering of quote spans and punctuation groups.

/// Delimiter used for quote spans in both input and output.
pub const QUOTE: char = '\'';

/// Render captured quote words as a single quoted phrase: `'I am great'`.
///
/// Zero words render as an empty pair, `''`.
pub fn format_quote(words: &[String]) -> String {
    let mut quoted = String::with_capacity(words.iter().map(|w| w.len() + 1).sum::<usize>() + 2);
    quoted.push(QUOTE);
    quoted.push_str(&words.join(" "));
    quoted.push(QUOTE);
    quoted
}

/// Render a punctuation group as its marks fused together: `. . .` becomes `...`.
pub fn format_punctuation<I>(marks: I) -> String
where
    I: IntoIterator<Item = char>,
{
    marks.into_iter().collect()
}

/// Fold the content of a quote that was never closed back into plain words. The opening
/// quote stays attached to the first captured word.
pub fn unterminated_quote(mut words: Vec<String>) -> Vec<String> {
    match words.first_mut() {
        Some(first) => first.insert(0, QUOTE),
        None => words.push(QUOTE.to_string()),
    }
    words
}
