//! Error taxonomy for extraction.
//!
//! Only [`ExtractError`] aborts extraction for a file. Per-pattern failures
//! are represented as [`QueryCompileError`] and absorbed into diagnostics by
//! the extractor, so one stale query template costs a single category's
//! coverage rather than the whole file.

use thiserror::Error;

/// Fatal extraction failures.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// No query template set is registered for the language identifier.
    #[error("no query templates registered for language '{0}'")]
    UnsupportedLanguage(String),

    /// No grammar is bundled for the language identifier.
    #[error("no grammar available for language '{0}'")]
    UnsupportedGrammar(String),

    /// The parser rejected the compiled grammar (ABI version mismatch).
    #[error("grammar rejected by the parser: {0}")]
    IncompatibleGrammar(#[from] tree_sitter::LanguageError),

    /// The parser returned no tree at all. Malformed source does not trigger
    /// this; tree-sitter recovers into a partial tree with error nodes.
    #[error("parser produced no syntax tree")]
    ParseFailed,
}

/// A query pattern that the active grammar cannot compile.
///
/// Raised when a pattern references a node type, field name, or anchor the
/// installed grammar version does not provide. Carries the offending pattern
/// and language so the failure can be attributed in diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("query pattern is incompatible with the '{language}' grammar: {message}")]
pub struct QueryCompileError {
    /// Language identifier the pattern was evaluated against.
    pub language: String,
    /// The pattern text that failed to compile.
    pub pattern: String,
    /// The grammar engine's own description of the failure.
    pub message: String,
}
