//! # Configuration Management
//!
//! Centralized configuration for a single engine run: which dictionary to
//! search, the word-count bound, and the optional grammar filter / sort
//! key / output destination. Built from parsed CLI arguments via the
//! builder pattern.
//!
//! ## Default Configuration
//!
//! - Dictionary: `pu`
//! - Grammar filter: disabled
//! - Sort key: alphabetical
//! - Output: stdout
//!
//! ## Usage
//!
//! ```rust
//! use palindrome_engine::config::Config;
//! use palindrome_engine::sort::SortKey;
//!
//! let config = Config::new(3)
//!     .with_grammar_filter(true)
//!     .with_sort_key(SortKey::Length);
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::sort::SortKey;
use crate::words::Dictionary;

/// Central configuration for one engine invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Maximum number of words in any emitted palindrome (`K`).
    pub max_word_count: usize,

    /// Which built-in dictionary tier to search over.
    pub dictionary: Dictionary,

    /// Whether to discard palindromes that fail the grammar predicate.
    pub grammar_filter: bool,

    /// Ordering applied to the enumerator's output before it's written.
    pub sort_key: SortKey,

    /// Output destination; `None` means stdout.
    pub output_path: Option<PathBuf>,
}

impl Config {
    /// Creates a configuration with the given word-count bound and all
    /// other settings at their defaults.
    pub fn new(max_word_count: usize) -> Self {
        Self {
            max_word_count,
            dictionary: Dictionary::Pu,
            grammar_filter: false,
            sort_key: SortKey::Alphabetical,
            output_path: None,
        }
    }

    pub fn with_dictionary(mut self, dictionary: Dictionary) -> Self {
        self.dictionary = dictionary;
        self
    }

    pub fn with_grammar_filter(mut self, enabled: bool) -> Self {
        self.grammar_filter = enabled;
        self
    }

    pub fn with_sort_key(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    pub fn with_output_path(mut self, path: Option<PathBuf>) -> Self {
        self.output_path = path;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::new(5);
        assert_eq!(config.max_word_count, 5);
        assert_eq!(config.dictionary, Dictionary::Pu);
        assert!(!config.grammar_filter);
        assert_eq!(config.sort_key, SortKey::Alphabetical);
        assert!(config.output_path.is_none());
    }

    #[test]
    fn builder_overrides_apply() {
        let config = Config::new(3).with_grammar_filter(true).with_sort_key(SortKey::Length);
        assert!(config.grammar_filter);
        assert_eq!(config.sort_key, SortKey::Length);
    }
}
