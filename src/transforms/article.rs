//! Indefinite article correction ("a" versus "an").
//!
//! The choice is made from the spelling of the following word:
//!
//!     vowel letter                  -> an   (an apple, an untold story)
//!     vowel with consonant sound    -> a    (a unicorn, a useful tool, a eurasian)
//!     silent h                      -> an   (an hour, an honest person, an heir)
//!     anything else                 -> a    (a book, a horse, a 1F)
//!
//! Prefix tables are matched case-insensitively.

use std::borrow::Cow;

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Vowel-initial prefixes pronounced with a leading consonant sound. Checked for every
/// vowel, not only `u`, so `a eurasian` keeps its `a`.
const CONSONANT_SOUND_PREFIXES: &[&str] = &["uni", "eura", "use"];

/// h-initial prefixes where the h is silent.
const SILENT_H_PREFIXES: &[&str] = &["hour", "honest", "honor", "heir"];

/// Return the article to use in place of `word` when it precedes `next_word`.
///
/// Only `a` and `A` are ever rewritten, to `an` and `An`. Everything else, including an
/// empty `next_word`, comes back untouched.
pub fn fix_article<'a>(word: &'a str, next_word: &str) -> Cow<'a, str> {
    if !word.eq_ignore_ascii_case("a") || !takes_an(next_word) {
        return Cow::Borrowed(word);
    }
    if word == "A" {
        Cow::Borrowed("An")
    } else {
        Cow::Borrowed("an")
    }
}

/// Whether `word` should be preceded by "an".
pub fn takes_an(word: &str) -> bool {
    let Some(first) = word.chars().next() else {
        return false;
    };
    let lowered = word.to_ascii_lowercase();
    match first.to_ascii_lowercase() {
        'h' => has_any_prefix(&lowered, SILENT_H_PREFIXES),
        c if VOWELS.contains(&c) => !has_any_prefix(&lowered, CONSONANT_SOUND_PREFIXES),
        _ => false,
    }
}

fn has_any_prefix(word: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| word.starts_with(prefix))
}
