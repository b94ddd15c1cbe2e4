//! Case folding for the `up`, `low` and `cap` directives.
//!
//! Folding is ASCII only. `Capitalized` uppercases the first character and leaves the
//! rest of the word as written, so `DISCOVERY` stays `DISCOVERY`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Upper,
    Lower,
    Capitalized,
}

impl Case {
    pub fn apply(&self, word: &str) -> String {
        match self {
            Case::Upper => word.to_ascii_uppercase(),
            Case::Lower => word.to_ascii_lowercase(),
            Case::Capitalized => capitalize(word),
        }
    }

    /// Apply to the last `count` words of `words`. A count of zero means one, a count past
    /// the length covers every word.
    pub fn apply_to_tail(&self, words: &mut [String], count: usize) {
        let count = count.max(1).min(words.len());
        let start = words.len() - count;
        for word in &mut words[start..] {
            *word = self.apply(word);
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("hello", "HELLO")]
    #[case("HeLLo", "HELLO")]
    #[case("hello123!", "HELLO123!")]
    #[case("", "")]
    fn test_upper(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(Case::Upper.apply(input), expected);
    }

    #[rstest]
    #[case("HELLO", "hello")]
    #[case("DAY", "day")]
    #[case("HELLO123", "hello123")]
    #[case("", "")]
    fn test_lower(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(Case::Lower.apply(input), expected);
    }

    #[rstest]
    #[case("hello", "Hello")]
    #[case("HELLO", "HELLO")]
    #[case("hELLO", "HELLO")]
    #[case("it", "It")]
    #[case("a", "A")]
    #[case("1hello", "1hello")]
    #[case("'quoted'", "'quoted'")]
    #[case("", "")]
    fn test_capitalized(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(Case::Capitalized.apply(input), expected);
    }

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_apply_to_tail_counts() {
        let mut buffer = words(&["this", "is", "so", "exciting"]);
        Case::Upper.apply_to_tail(&mut buffer, 2);
        assert_eq!(buffer, words(&["this", "is", "SO", "EXCITING"]));
    }

    #[test]
    fn test_apply_to_tail_clamps() {
        let mut buffer = words(&["word"]);
        Case::Upper.apply_to_tail(&mut buffer, 10);
        assert_eq!(buffer, words(&["WORD"]));
    }

    #[test]
    fn test_apply_to_tail_zero_means_one() {
        let mut buffer = words(&["one", "two"]);
        Case::Capitalized.apply_to_tail(&mut buffer, 0);
        assert_eq!(buffer, words(&["one", "Two"]));
    }

    #[test]
    fn test_apply_to_tail_empty_buffer() {
        let mut buffer: Vec<String> = Vec::new();
        Case::Lower.apply_to_tail(&mut buffer, 3);
        assert!(buffer.is_empty());
    }
}
