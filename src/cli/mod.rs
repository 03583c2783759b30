//! CLI support for rulecheck
//!
//! Provides programmatic access to the rulecheck commands for embedding in
//! other tools.

mod batch;
mod check;
mod docs;
mod inspect;

pub use batch::{execute_batch, BatchOptions};
pub use check::{execute_check, CheckOptions};
pub use docs::{get_doc_category, get_docs_overview, DocCategory};
pub use inspect::{execute_parse, execute_tokenize};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Rule text rejected
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),

    /// Operand text rejected by the tokenizer
    #[error("Tokenize error: {0}")]
    Lex(#[from] crate::LexError),

    /// Rule could not be evaluated
    #[error("Evaluation error: {0}")]
    Eval(#[from] crate::EvalError),

    /// Stored rule could not be evaluated
    #[error("Evaluation error: {0}")]
    Service(#[from] crate::ServiceError),

    /// JSON parsing error
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No input provided
    #[error("No input provided. Use --input or pipe text to stdin.")]
    NoInput,

    /// Unknown documentation category
    #[error("Unknown category: '{0}'\nRun 'rulecheck docs' to see available categories.")]
    UnknownCategory(String),
}
