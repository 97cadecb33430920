//! Output ordering: the `-s/--sort` key.

use crate::language_model::LanguageModel;

/// Which key to sort enumerator output by, selected via `-s/--sort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
pub enum SortKey {
    /// Alphabetical.
    #[value(name = "a")]
    Alphabetical,
    /// Length (character count), then alphabetical.
    #[value(name = "l")]
    Length,
    /// Word count, then alphabetical.
    #[value(name = "w")]
    WordCount,
    /// Ascending language-model score.
    #[value(name = "lm")]
    LanguageModel,
}

/// Sorts `palindromes` in place by `key`. Stable, so ties fall back to the
/// enumerator's original (deterministic but worker-order-dependent after a
/// parallel run) ordering.
///
/// `lm` must be `Some` when `key` is [`SortKey::LanguageModel`]; the caller
/// builds it once and passes it in rather than having every sort call
/// retrain the model.
pub fn sort_palindromes(palindromes: &mut [String], key: SortKey, lm: Option<&LanguageModel>) {
    match key {
        SortKey::Alphabetical => palindromes.sort(),
        SortKey::Length => palindromes.sort_by_key(|s| (s.chars().count(), s.clone())),
        SortKey::WordCount => palindromes.sort_by_key(|s| (s.split(' ').count(), s.clone())),
        SortKey::LanguageModel => {
            let lm = lm.expect("language-model sort key requires a fitted LanguageModel");
            palindromes.sort_by(|a, b| {
                lm.score(a).partial_cmp(&lm.score(b)).unwrap_or(std::cmp::Ordering::Equal)
            });
        }
    }
}
