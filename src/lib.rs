//! Structscan - structural code inventory extraction.
//!
//! Structscan answers "what structural entities does this file declare" by
//! evaluating grammar-aware queries against a tree-sitter parse of the
//! source. The result is a per-file inventory of functions, classes,
//! interfaces, imports, annotations, and enums (plus language-specific
//! categories) that a downstream component can diff across revisions.
//!
//! # Architecture
//!
//! ```text
//! source bytes ──▶ grammar (parse) ──▶ syntax tree
//!                                          │
//! templates (per-language ──▶ evaluate ──▶ normalize ──▶ extract
//!  category -> patterns)      (queries)    (captures)       │
//!                                                           ▼
//!                                            Extraction { inventory,
//!                                              diagnostics, degraded }
//! ```
//!
//! - `templates`: registry of per-language query template sets
//! - `grammar`: grammar provider seam over the bundled tree-sitter grammars
//! - `evaluate`: runs one pattern, emitting labeled capture events
//! - `normalize`: collapses the engine's raw capture shapes into one
//! - `extract`: drives the whole pipeline with per-pattern failure isolation
//! - `inventory`: the output types (spans, entities, diagnostics)
//!
//! A stale query pattern - one referencing node shapes the installed
//! grammar version no longer provides - costs exactly its own category's
//! coverage and leaves a diagnostic; it never fails the file.
//!
//! # Adding a Language
//!
//! Add a module under `src/templates/` defining the category patterns,
//! register it in `templates::register_builtins`, and map the grammar in
//! `grammar::BundledGrammars`.

pub mod cli;
pub mod error;
pub mod evaluate;
pub mod extract;
pub mod grammar;
pub mod inventory;
pub mod normalize;
pub mod templates;

pub use error::{ExtractError, QueryCompileError};
pub use extract::{extract, Extractor};
pub use grammar::{BundledGrammars, GrammarProvider};
pub use inventory::{Diagnostic, Entity, Extraction, Inventory, Span};
pub use templates::TemplateSet;

/// Register the builtin language template sets.
///
/// Extraction calls this lazily, so invoking it at startup is optional but
/// makes registry contents deterministic before any threads fan out.
pub fn init() {
    templates::register_builtins();
}
