//! # Palindrome Engine
//!
//! Exhaustively enumerates every multi-word palindrome (case-insensitive,
//! ignoring inter-word spaces) of bounded length that can be formed from a
//! fixed dictionary of words.
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//! - `words`: the built-in dictionaries (`pu`, `ku-suli`, `ku-lili`)
//! - `palindrome`: the search engine itself — graph primitives
//!   ([`palindrome::elements`]), graph construction
//!   ([`palindrome::building`]), the assembled graph ([`palindrome::graph`]),
//!   and the bounded enumerator ([`palindrome::enumerate`])
//! - `grammar`: an optional PEG-style sentence filter
//! - `language_model`: an optional bigram scorer used as a sort key
//! - `sort`: output ordering
//! - `config`: per-run configuration
//! - `error`: the engine's error type
//! - `cli`: command-line interface
//!
//! ## Key Features
//!
//! - **Graph-based search**: collapses the exponential space of word
//!   sequences into a finite graph keyed on the unmatched tail of a
//!   partial palindrome.
//! - **Pruned enumeration**: a precomputed distance-to-terminal oracle
//!   prunes dead branches before the bounded DFS runs.
//! - **Parallel driver**: partitions enumeration by start edge across a
//!   worker pool once the word-count bound makes it worthwhile.
//! - **Optional grammar filter and language-model sort key**.
//!
//! ## Example
//!
//! ```rust
//! use palindrome_engine::palindrome;
//! use palindrome_engine::words::Dictionary;
//!
//! let words = Dictionary::Pu.words();
//! let palindromes = palindrome::search(&words, 3);
//! assert!(palindromes.iter().all(|p| !p.is_empty()));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod grammar;
pub mod language_model;
pub mod palindrome;
pub mod sort;
pub mod words;
