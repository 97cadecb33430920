//! Optional language-model sort key: an opaque `score(sentence) -> f64`
//! consumed by the driver when sorting by `-s lm`.
//!
//! Ported from a Laplace-smoothed bigram model (`nltk.lm.Laplace`) trained
//! on a small corpus of valid sentences. The original trains from text
//! files shipped alongside the repository; those aren't part of this
//! engine's build, so [`LanguageModel::new`] trains from a small built-in
//! corpus instead. Per spec, this scorer is opaque — callers must not
//! expect its numeric output to match the original bit-for-bit, only that
//! it orders more natural-looking sentences ahead of less natural ones.

use std::collections::HashMap;

/// Sentences reasonably well-formed in the target language, used to fit
/// the bigram frequencies at construction time. Capitalized words are
/// folded to a single `PROPER_NOUN` token before training, mirroring the
/// source's `tokenize`.
const TRAINING_CORPUS: &[&str] = &[
    "mi toki e ni",
    "sina toki tawa mi",
    "jan li pona",
    "mi wile e moku",
    "ona li lukin e kala",
    "mi mute li kama tawa tomo",
    "sina pona mute",
    "jan li pali e ilo",
    "mi olin e sina",
    "soweli li moku e kasi",
    "mi lukin e suno",
    "sina jo e lipu",
    "ona li toki pona",
    "mi tawa ma mute",
    "jan pona li kama",
    "mi pana e moku tawa sina",
    "sina kepeken e ilo",
    "mi sona e toki",
    "ona li wile moku",
    "mi mute li pona",
];

const START: &str = "<s>";
const END: &str = "</s>";

fn tokenize(sentence: &str) -> Vec<String> {
    sentence
        .split_whitespace()
        .map(|token| {
            if token.chars().next().is_some_and(char::is_uppercase) {
                "PROPER_NOUN".to_string()
            } else {
                token.to_lowercase()
            }
        })
        .collect()
}

fn padded_bigrams(tokens: &[String]) -> Vec<(String, String)> {
    let mut padded = Vec::with_capacity(tokens.len() + 2);
    padded.push(START.to_string());
    padded.extend(tokens.iter().cloned());
    padded.push(END.to_string());

    padded.windows(2).map(|pair| (pair[0].clone(), pair[1].clone())).collect()
}

/// A Laplace-smoothed bigram model over a fixed training corpus, used
/// purely as an ordering key for enumerator output.
#[derive(Debug)]
pub struct LanguageModel {
    bigram_counts: HashMap<(String, String), u64>,
    unigram_counts: HashMap<String, u64>,
    vocabulary_size: u64,
}

impl LanguageModel {
    /// Fits the model from [`TRAINING_CORPUS`].
    pub fn new() -> Self {
        Self::from_corpus(TRAINING_CORPUS)
    }

    /// Fits the model from an arbitrary corpus of sentences, exposed for
    /// testing.
    pub fn from_corpus(corpus: &[&str]) -> Self {
        let mut bigram_counts: HashMap<(String, String), u64> = HashMap::new();
        let mut unigram_counts: HashMap<String, u64> = HashMap::new();
        let mut vocabulary: std::collections::HashSet<String> = std::collections::HashSet::new();
        vocabulary.insert(START.to_string());
        vocabulary.insert(END.to_string());

        for sentence in corpus {
            let tokens = tokenize(sentence);
            for token in &tokens {
                vocabulary.insert(token.clone());
            }
            for (first, second) in padded_bigrams(&tokens) {
                *unigram_counts.entry(first.clone()).or_insert(0) += 1;
                *bigram_counts.entry((first, second)).or_insert(0) += 1;
            }
            *unigram_counts.entry(END.to_string()).or_insert(0) += 1;
        }

        Self { bigram_counts, unigram_counts, vocabulary_size: vocabulary.len() as u64 }
    }

    fn bigram_probability(&self, first: &str, second: &str) -> f64 {
        let bigram_count =
            self.bigram_counts.get(&(first.to_string(), second.to_string())).copied().unwrap_or(0);
        let unigram_count = self.unigram_counts.get(first).copied().unwrap_or(0);
        // Laplace (add-one) smoothing.
        (bigram_count as f64 + 1.0) / (unigram_count as f64 + self.vocabulary_size as f64)
    }

    /// Cross-entropy (average negative log-probability per bigram) of
    /// `sentence` under the fitted model. Lower means more like the
    /// training corpus; used ascending as a sort key.
    pub fn score(&self, sentence: &str) -> f64 {
        let tokens = tokenize(sentence);
        let bigrams = padded_bigrams(&tokens);

        let total_log_prob: f64 = bigrams
            .iter()
            .map(|(first, second)| self.bigram_probability(first, second).log2())
            .sum();

        -total_log_prob / bigrams.len() as f64
    }
}

impl Default for LanguageModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_corpus_sentence_scores_lower_than_gibberish() {
        let lm = LanguageModel::new();
        let familiar = lm.score("mi toki e ni");
        let unfamiliar = lm.score("weka weka weka weka weka weka");
        assert!(familiar < unfamiliar, "familiar={familiar}, unfamiliar={unfamiliar}");
    }

    #[test]
    fn score_is_deterministic() {
        let lm = LanguageModel::new();
        assert_eq!(lm.score("jan li pona"), lm.score("jan li pona"));
    }

    #[test]
    fn empty_sentence_scores_without_panicking() {
        let lm = LanguageModel::new();
        assert!(lm.score("").is_finite());
    }

    #[test]
    fn proper_nouns_fold_to_a_shared_token() {
        let lm = LanguageModel::from_corpus(&["Ilo toki", "Lukin toki"]);
        assert_eq!(lm.score("Ilo toki"), lm.score("Lukin toki"));
    }
}
