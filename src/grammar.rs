//! Optional grammar filter: a small PEG-style predicate over sentences,
//! `is_valid(sentence) -> bool`, consumed by the core driver when `-g` is
//! given on the command line.
//!
//! Ported from a hand-rolled parser-combinator grammar for a tiny natural
//! language (word categories: pronouns, a closed content-word list, proper
//! nouns, and a handful of particles). The grammar is known to be stricter
//! than the target language's full description — it has no numeral or
//! ordinal support wired into `sentence`, matching the source's own `TODO:
//! implement the grammar` marker. Per the gap this leaves, callers should
//! treat this predicate as given rather than a complete reference grammar.

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::alpha1;
use nom::combinator::all_consuming;
use nom::multi::many1;
use nom::sequence::terminated;
use nom::IResult;

const PRONOUNS: &[&str] = &["mi", "sina"];

const NON_CONTENT_WORDS: &[&str] = &["a", "anu", "e", "en", "kin", "la", "li", "o", "pi"];

const CONTENT_WORDS: &[&str] = &[
    "akesi", "ala", "alasa", "ale", "ali", "anpa", "ante", "awen", "esun", "ijo", "ike", "ilo",
    "insa", "jaki", "jan", "jelo", "jo", "kala", "kalama", "kama", "kasi", "ken", "kepeken",
    "kili", "kiwen", "ko", "kon", "kule", "kulupu", "kute", "lape", "laso", "lawa", "len", "lete",
    "lili", "linja", "lipu", "loje", "lon", "luka", "lukin", "lupa", "ma", "mama", "mani", "meli",
    "mije", "moku", "moli", "monsi", "mu", "mun", "musi", "mute", "namako", "nanpa", "nasa",
    "nasin", "nena", "ni", "nimi", "noka", "oko", "olin", "ona", "open", "pakala", "pali",
    "palisa", "pan", "pana", "pilin", "pimeja", "pini", "pipi", "poka", "poki", "pona", "pu",
    "sama", "seli", "selo", "seme", "sewi", "sijelo", "sike", "sin", "sinpin", "sitelen", "sona",
    "soweli", "suli", "suno", "supa", "suwi", "tan", "taso", "tawa", "telo", "tenpo", "toki",
    "tomo", "tu", "unpa", "uta", "utala", "walo", "wan", "waso", "wawa", "weka", "wile",
];

/// Matches `word` as a literal prefix, then asserts a word boundary:
/// the next byte (if any) must not be an ASCII letter. Mirrors the
/// source's `word_boundary = \b[^A-Za-z]*` — without it, `tag` alone
/// would happily match `"a"` as a prefix of `"akesi"` and leave `"kesi"`
/// dangling, or `"kala"` as a prefix of `"kalama"` with nothing between
/// it and the next word.
fn word_literal<'a>(word: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    move |input: &'a str| {
        let (rest, matched) = tag(word)(input)?;
        if rest.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
            return Err(nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Tag)));
        }
        Ok((rest, matched))
    }
}

fn any_of_words<'a>(words: &'static [&'static str]) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    move |input: &'a str| {
        for &word in words {
            if let Ok((rest, matched)) = word_literal(word)(input) {
                return Ok((rest, matched));
            }
        }
        Err(nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Tag)))
    }
}

/// Checks whether `candidate` is built from alternating consonant/vowel
/// syllables with an optional trailing `n` per syllable, excluding a
/// handful of disallowed onsets (`ji`, `ti`, `wo`, `wu`) and a disallowed
/// `nn` cluster. Ported by hand from the source's `proper_noun` regex,
/// which relies on lookaround the `regex` crate doesn't support.
fn looks_like_proper_noun(candidate: &str) -> bool {
    const ONSETS: &str = "jklmnpstw";
    const VOWELS: &str = "aeiou";

    let chars: Vec<char> = candidate.chars().collect();
    if chars.is_empty() {
        return false;
    }

    let mut i = 0;
    let first = chars[0];
    if VOWELS.contains(first.to_ascii_lowercase()) {
        i = 1;
    } else if ONSETS.contains(first.to_ascii_lowercase()) {
        let Some(&vowel) = chars.get(1) else { return false };
        if !VOWELS.contains(vowel.to_ascii_lowercase()) {
            return false;
        }
        let onset = first.to_ascii_lowercase();
        let vowel = vowel.to_ascii_lowercase();
        if matches!((onset, vowel), ('j', 'i') | ('t', 'i') | ('w', 'o') | ('w', 'u')) {
            return false;
        }
        i = 2;
    } else {
        return false;
    }

    if chars.get(i) == Some(&'n') && chars.get(i + 1) != Some(&'n') {
        i += 1;
    }

    while i < chars.len() {
        let onset = chars[i];
        if !ONSETS.contains(onset) {
            return false;
        }
        let Some(&vowel) = chars.get(i + 1) else { return false };
        if !VOWELS.contains(vowel) {
            return false;
        }
        if matches!((onset, vowel), ('j', 'i') | ('t', 'i') | ('w', 'o') | ('w', 'u')) {
            return false;
        }
        i += 2;

        if chars.get(i) == Some(&'n') && chars.get(i + 1) != Some(&'n') {
            i += 1;
        }
    }

    true
}

fn proper_noun(input: &str) -> IResult<&str, &str> {
    let (rest, candidate) = alpha1(input)?;
    if candidate.chars().next().is_some_and(char::is_uppercase) && looks_like_proper_noun(candidate) {
        Ok((rest, candidate))
    } else {
        Err(nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Verify)))
    }
}

/// A single token in one of the recognized grammatical categories.
fn word(input: &str) -> IResult<&str, &str> {
    alt((
        any_of_words(NON_CONTENT_WORDS),
        any_of_words(PRONOUNS),
        any_of_words(CONTENT_WORDS),
        proper_noun,
    ))(input)
}

/// A sentence is one or more recognized words, exactly as the source's
/// `sentence = rep1(word)`, case-insensitively folded for the closed-class
/// lookups but case-sensitive for proper nouns.
fn sentence(input: &str) -> IResult<&str, Vec<&str>> {
    all_consuming(many1(terminated(word, nom::character::complete::space0)))(input)
}

/// Checks whether `sentence` parses as a sequence of recognized words.
/// Pure and deterministic: no side effects, safe to call from any worker.
pub fn is_valid(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    sentence(trimmed).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_single_content_word() {
        assert!(is_valid("ala"));
    }

    #[test]
    fn recognizes_multi_word_sentence() {
        assert!(is_valid("mi toki e ni"));
    }

    #[test]
    fn rejects_unknown_token() {
        assert!(!is_valid("mi toki e xyzzy"));
    }

    #[test]
    fn rejects_empty_sentence() {
        assert!(!is_valid(""));
        assert!(!is_valid("   "));
    }

    #[test]
    fn content_word_prefixed_by_a_particle_is_not_split_at_the_particle() {
        // "akesi" starts with the particle "a", but must be recognized
        // whole — not as "a" followed by the unmatched remainder "kesi".
        assert!(is_valid("akesi"));
    }

    #[test]
    fn two_words_are_not_merged_across_a_missing_boundary() {
        // "jano" is not a recognized word; it must not parse as "jan" + "o"
        // glued together with zero space between them.
        assert!(!is_valid("jano"));
    }

    #[test]
    fn recognizes_proper_noun() {
        assert!(is_valid("mi toki tawa Lukin"));
    }
}
