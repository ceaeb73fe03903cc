//! Grammar provider: maps language identifiers to compiled grammars and
//! parses source bytes into syntax trees.
//!
//! Extraction depends on this seam only through the [`GrammarProvider`]
//! trait, so tests can substitute a provider (including one that returns a
//! deliberately mismatched grammar to exercise query-drift handling).

use tree_sitter::{Language, Parser, Tree};

use crate::error::ExtractError;

/// Compiles grammars and parses source.
///
/// Implementations must be safe to share across threads; compiled grammars
/// are immutable and a fresh parser is created per parse call because
/// `tree_sitter::Parser` is not `Sync`.
pub trait GrammarProvider: Send + Sync {
    /// Return the compiled grammar for a language identifier.
    fn compile(&self, language: &str) -> Result<Language, ExtractError>;

    /// Parse source bytes into a syntax tree.
    ///
    /// Malformed source still yields a tree; tree-sitter recovers into a
    /// partial tree containing error nodes.
    fn parse(&self, grammar: &Language, source: &[u8]) -> Result<Tree, ExtractError> {
        let mut parser = Parser::new();
        parser.set_language(grammar)?;
        parser.parse(source, None).ok_or(ExtractError::ParseFailed)
    }
}

/// The grammars linked into this binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledGrammars;

impl GrammarProvider for BundledGrammars {
    fn compile(&self, language: &str) -> Result<Language, ExtractError> {
        match language {
            "java" => Ok(tree_sitter_java::LANGUAGE.into()),
            "python" => Ok(tree_sitter_python::LANGUAGE.into()),
            "javascript" => Ok(tree_sitter_javascript::LANGUAGE.into()),
            "typescript" => Ok(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()),
            "go" => Ok(tree_sitter_go::LANGUAGE.into()),
            "rust" => Ok(tree_sitter_rust::LANGUAGE.into()),
            _ => Err(ExtractError::UnsupportedGrammar(language.to_string())),
        }
    }
}
