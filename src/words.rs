//! # Built-in Dictionaries
//!
//! This module ships the word lists the palindrome engine searches over: a
//! small constructed-language vocabulary (Toki Pona-derived) in three nested
//! supersets, matching the `-w/--words` CLI flag's `pu`/`ku-suli`/`ku-lili`
//! tags.
//!
//! `PU` is the core content-word vocabulary (pronouns, particles, and content
//! words). `KU_SULI` and `KU_LILI` extend it with additional vocabulary, each
//! a strict superset of the previous level, growing the search space for
//! longer or more exhaustive runs.
//!
//! These are constant in-memory arrays — no external dictionary files are
//! read at runtime.

/// Core vocabulary: pronouns, grammatical particles, and content words.
pub const PU: &[&str] = &[
    "a", "akesi", "ala", "alasa", "ale", "ali", "anpa", "ante", "anu", "awen", "e", "en", "esun",
    "ijo", "ike", "ilo", "insa", "jaki", "jan", "jelo", "jo", "kala", "kalama", "kama", "kasi",
    "ken", "kepeken", "kili", "kin", "kiwen", "ko", "kon", "kule", "kulupu", "kute", "la", "lape",
    "laso", "lawa", "len", "lete", "li", "lili", "linja", "lipu", "loje", "lon", "luka", "lukin",
    "lupa", "ma", "mama", "mani", "meli", "mi", "mije", "moku", "moli", "monsi", "mu", "mun",
    "musi", "mute", "namako", "nanpa", "nasa", "nasin", "nena", "ni", "nimi", "noka", "o", "oko",
    "olin", "ona", "open", "pakala", "pali", "palisa", "pan", "pana", "pi", "pilin", "pimeja",
    "pini", "pipi", "poka", "poki", "pona", "pu", "sama", "seli", "selo", "seme", "sewi", "sijelo",
    "sike", "sin", "sina", "sinpin", "sitelen", "sona", "soweli", "suli", "suno", "supa", "suwi",
    "tan", "taso", "tawa", "telo", "tenpo", "toki", "tomo", "tu", "unpa", "uta", "utala", "walo",
    "wan", "waso", "wawa", "weka", "wile",
];

/// Words added on top of [`PU`] for the "ku suli" ("important ku") level.
const KU_SULI_EXTRA: &[&str] = &[
    "ae", "an", "anseen", "anto", "asa", "epomo", "etu", "iopo", "ipu", "ja", "jai", "janju",
    "janu", "jasiwu", "jasole", "jawe", "jeji", "jejo", "jenomi", "jento", "jesunu", "jeu", "ji",
    "jiji", "jitonni", "jojo", "jokosu", "jolu", "jomi", "jomu", "jone", "joou", "jopa", "jotolo",
    "ju", "jukosu", "julunsa", "jun", "jupe", "ka",
];

/// Words added on top of "ku suli" for the "ku lili" ("small ku") level.
const KU_LILI_EXTRA: &[&str] = &[
    "kainmi", "kajape", "kan", "kanonte", "kapipu", "kasa", "kase", "ke", "keji", "kenneka",
    "kenten", "kenwi", "kewen", "kiji", "kile", "kino", "kitanu", "konmo", "konsomi", "ku",
    "kunan", "kutani", "laiu", "lajoko", "lalo", "lanpi", "latu", "le", "lekulu", "lemo", "lenwe",
    "lesonsu", "lie", "liman", "linunlo", "liwini", "lo", "loji", "lola", "loma", "lomo", "lonke",
    "lulato", "lume", "lunluwi", "luntosu", "lupupe", "luwu", "maju", "malo", "manua", "mata",
    "mawa", "menin", "menmoti", "menu", "min", "minla", "minu", "mipiso", "mipo", "misoso",
    "miwan", "mo", "moke", "monepun", "mosen", "muju", "muka", "mukin", "mumi", "muta", "nalinpu",
    "nanike", "nanpile", "nawin", "ne", "nesei", "neso", "nii", "nijanta", "nili", "no", "noji",
    "non", "nonno", "nowo", "nu", "nunkoji", "nunu", "nuo", "nusaja", "nuwanu", "nuwawi", "nuwo",
    "nuwoi", "okise", "palojon", "pamame", "pananki", "panemi", "panmu", "panso", "pawisa", "pean",
    "pejoe", "peka", "peninma", "pesisan", "peso", "pije", "pilu", "pima", "poe", "polai", "ponwe",
    "powa", "punse", "pupi", "sa", "sakajo", "samaja", "saponti", "sasa", "sase", "se", "sei",
    "sejonun", "semitu", "sen", "senon", "sete", "seuto", "sewalu", "si", "sikiti", "sini", "sisa",
    "situn", "siwa", "sojatin", "sopu", "soti", "sowi", "sowo", "su", "sun", "sunpan", "suteu",
    "suti", "suto", "ta", "taanmu", "tanato", "tawo", "te", "teji", "teko", "tena", "tepa",
];

/// `PU` plus [`KU_SULI_EXTRA`]: the medium dictionary tier.
pub fn ku_suli() -> Vec<&'static str> {
    superset(&[PU, KU_SULI_EXTRA])
}

/// `PU` plus [`KU_SULI_EXTRA`] plus [`KU_LILI_EXTRA`]: the largest dictionary tier.
pub fn ku_lili() -> Vec<&'static str> {
    superset(&[PU, KU_SULI_EXTRA, KU_LILI_EXTRA])
}

fn superset(levels: &[&[&'static str]]) -> Vec<&'static str> {
    levels.iter().flat_map(|level| level.iter().copied()).collect()
}

/// Which built-in dictionary to search over, selected via `-w/--words`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
pub enum Dictionary {
    /// The core `pu` vocabulary.
    Pu,
    /// `pu` plus the `ku suli` extension.
    #[value(name = "ku-suli")]
    KuSuli,
    /// `pu` plus `ku suli` plus the `ku lili` extension (largest tier).
    #[value(name = "ku-lili")]
    KuLili,
}

impl Dictionary {
    /// Returns the word list for this dictionary tier.
    pub fn words(self) -> Vec<&'static str> {
        match self {
            Dictionary::Pu => PU.to_vec(),
            Dictionary::KuSuli => ku_suli(),
            Dictionary::KuLili => ku_lili(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn dictionaries_are_nested_supersets() {
        let pu: HashSet<_> = PU.iter().collect();
        let ku_suli: HashSet<_> = ku_suli().into_iter().collect();
        let ku_lili: HashSet<_> = ku_lili().into_iter().collect();

        assert!(pu.is_subset(&ku_suli));
        assert!(ku_suli.is_subset(&ku_lili));
        assert!(ku_suli.len() > pu.len());
        assert!(ku_lili.len() > ku_suli.len());
    }

    #[test]
    fn all_words_are_ascii_letters_within_length_bounds() {
        for word in ku_lili() {
            assert!(!word.is_empty());
            assert!(word.chars().all(|c| c.is_ascii_alphabetic()));
        }
    }

    #[test]
    fn pu_is_within_the_expected_size_range() {
        assert!(PU.len() >= 100 && PU.len() <= 200);
    }
}
