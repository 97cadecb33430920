//! The palindrome search engine: graph construction and bounded enumeration.
//!
//! See [`elements`] for the node/edge primitives, [`building`] for the
//! construction algorithms, [`graph`] for the assembled, pruned graph, and
//! [`enumerate`] for the search itself.

pub mod building;
pub mod elements;
pub mod enumerate;
pub mod graph;

pub use elements::Node;
pub use enumerate::{generate, PARALLEL_THRESHOLD};
pub use graph::PalindromeGraph;

/// Finds every palindrome sentence of at most `max_word_count` words over
/// `word_list`, building the graph and running the enumerator in one call.
pub fn search(word_list: &[&str], max_word_count: usize) -> Vec<String> {
    let graph = PalindromeGraph::build(word_list);
    generate(&graph, max_word_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_closure_every_word_in_output_is_in_the_list() {
        let words = ["a", "ala", "alasa", "kala", "la", "pu"];
        let results = search(&words, 4);
        let allowed: std::collections::HashSet<&str> = words.iter().copied().collect();
        for sentence in &results {
            for word in sentence.split(' ') {
                assert!(allowed.contains(word), "unexpected word {word:?} in {sentence:?}");
            }
        }
    }

    #[test]
    fn every_result_is_actually_a_palindrome() {
        let words = ["a", "ala", "alasa", "kala", "la", "pu"];
        for sentence in search(&words, 4) {
            let joined: String = sentence.chars().filter(|c| !c.is_whitespace()).collect();
            let lower = joined.to_lowercase();
            let reversed: String = lower.chars().rev().collect();
            assert_eq!(lower, reversed, "{sentence:?} is not a palindrome");
        }
    }

    #[test]
    fn case_insensitive_matching_preserves_original_case() {
        // Property P5 (spec.md §8): exact output set, not a spot check —
        // a regression that drops or adds an unexpected combination must
        // fail this test.
        let words = ["ala", "Ala", "kALa"];
        let results: std::collections::HashSet<String> = search(&words, 2).into_iter().collect();
        let expected: std::collections::HashSet<String> = [
            "ala", "Ala", "ala ala", "ala Ala", "Ala ala", "Ala Ala", "ala kALa", "Ala kALa",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        assert_eq!(results, expected);
    }
}
