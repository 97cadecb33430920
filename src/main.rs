//! # Palindrome Engine - Main Entry Point
//!
//! Parses command-line arguments and delegates to [`palindrome_engine::cli::run`],
//! translating engine errors into the process exit code spec'd for each
//! error kind.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -- --help
//! ```
//!
//! ## Architecture
//!
//! - `main.rs`: entry point and process exit handling
//! - `cli.rs`: command-line interface and the run loop
//! - `config.rs`: per-run configuration
//! - `palindrome/`: graph construction, distance oracle, enumerator
//! - `grammar.rs`, `language_model.rs`, `sort.rs`: optional post-processing

use clap::Parser;
use palindrome_engine::cli::{run, Cli};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("palindrome-engine: {err}");
        std::process::exit(err.exit_code());
    }
}
