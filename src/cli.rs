//! # Command-Line Interface
//!
//! This module implements the command-line interface for the palindrome
//! search engine. It defines the CLI structure, argument parsing, and
//! top-level execution logic.
//!
//! ## Usage Examples
//!
//! ```bash
//! // Every palindrome of up to 4 words from the default (`pu`) dictionary
//! palindrome-engine 4
//!
//! // Search the larger `ku-lili` dictionary, sorted by length
//! palindrome-engine 5 --words ku-lili --sort l
//!
//! // Keep only palindromes that also parse as grammatical sentences
//! palindrome-engine 4 --grammar --output palindromes.txt
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use log::info;

use crate::config::Config;
use crate::error::EngineError;
use crate::grammar;
use crate::language_model::LanguageModel;
use crate::palindrome::{self, PalindromeGraph};
use crate::sort::{self, SortKey};
use crate::words::Dictionary;

/// Command-line arguments for the palindrome search engine.
///
/// This struct defines the top-level command-line interface and uses
/// clap's derive macros for automatic argument parsing and help
/// generation.
#[derive(Parser)]
#[command(name = "palindrome-engine")]
#[command(about = "Exhaustively enumerates multi-word palindromes from a built-in dictionary")]
pub struct Cli {
    /// Maximum number of words in any emitted palindrome.
    pub max_word_count: usize,

    /// Which built-in dictionary to search.
    #[arg(short = 'w', long = "words", value_enum, default_value_t = Dictionary::Pu)]
    pub words: Dictionary,

    /// Discard palindromes that don't parse as grammatical sentences.
    #[arg(short = 'g', long = "grammar")]
    pub grammar: bool,

    /// Sort order for the emitted palindromes.
    #[arg(short = 's', long = "sort", value_enum, default_value_t = SortKey::Alphabetical)]
    pub sort: SortKey,

    /// Output file path. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Enable verbose (debug-level) logging to stderr.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl std::fmt::Display for Dictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Dictionary::Pu => "pu",
            Dictionary::KuSuli => "ku-suli",
            Dictionary::KuLili => "ku-lili",
        };
        write!(f, "{tag}")
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            SortKey::Alphabetical => "a",
            SortKey::Length => "l",
            SortKey::WordCount => "w",
            SortKey::LanguageModel => "lm",
        };
        write!(f, "{tag}")
    }
}

/// Validates the parsed CLI arguments and builds a [`Config`] from them.
///
/// `MAX_WORD_COUNT` of zero is accepted (spec §P6: it degenerates to an
/// empty result, not an argument error); clap already rejects anything
/// that doesn't parse as a `usize`, covering the non-integer and negative
/// cases.
fn build_config(cli: &Cli) -> Result<Config, EngineError> {
    Ok(Config::new(cli.max_word_count)
        .with_dictionary(cli.words)
        .with_grammar_filter(cli.grammar)
        .with_sort_key(cli.sort)
        .with_output_path(cli.output.clone()))
}

/// Runs one engine invocation end to end: builds the graph, enumerates,
/// optionally filters and sorts, and writes the result.
///
/// # Errors
///
/// Returns [`EngineError::Argument`] for invalid configuration and
/// [`EngineError::Io`] if the output destination can't be written.
pub fn run(cli: Cli) -> Result<(), EngineError> {
    if cli.verbose {
        env_logger::Builder::new().filter_level(log::LevelFilter::Debug).init();
    } else {
        env_logger::Builder::new().filter_level(log::LevelFilter::Info).init();
    }

    let config = build_config(&cli)?;
    let started = std::time::Instant::now();

    let word_list = config.dictionary.words();
    info!("searching {} words (dictionary={})", word_list.len(), config.dictionary);

    let graph = PalindromeGraph::build(&word_list);
    let mut palindromes = palindrome::generate(&graph, config.max_word_count);
    info!("enumerated {} palindromes in {:?}", palindromes.len(), started.elapsed());

    if config.grammar_filter {
        let before = palindromes.len();
        palindromes.retain(|sentence| grammar::is_valid(sentence));
        info!("grammar filter kept {} of {} palindromes", palindromes.len(), before);
    }

    let lm = matches!(config.sort_key, SortKey::LanguageModel).then(LanguageModel::new);
    sort::sort_palindromes(&mut palindromes, config.sort_key, lm.as_ref());

    write_output(&palindromes, config.output_path.as_deref())?;
    Ok(())
}

/// Writes one palindrome per line, LF-terminated, to `output_path` or
/// stdout if `None`.
fn write_output(palindromes: &[String], output_path: Option<&std::path::Path>) -> Result<(), EngineError> {
    match output_path {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            for line in palindromes {
                writeln!(writer, "{line}")?;
            }
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            for line in palindromes {
                writeln!(writer, "{line}")?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_word_count_is_a_valid_argument() {
        let cli = Cli {
            max_word_count: 0,
            words: Dictionary::Pu,
            grammar: false,
            sort: SortKey::Alphabetical,
            output: None,
            verbose: false,
        };
        assert!(build_config(&cli).is_ok());
    }

    #[test]
    fn config_carries_through_every_flag() {
        let cli = Cli {
            max_word_count: 4,
            words: Dictionary::KuLili,
            grammar: true,
            sort: SortKey::Length,
            output: Some(PathBuf::from("out.txt")),
            verbose: false,
        };
        let config = build_config(&cli).unwrap();
        assert_eq!(config.max_word_count, 4);
        assert_eq!(config.dictionary, Dictionary::KuLili);
        assert!(config.grammar_filter);
        assert_eq!(config.sort_key, SortKey::Length);
        assert_eq!(config.output_path, Some(PathBuf::from("out.txt")));
    }
}
