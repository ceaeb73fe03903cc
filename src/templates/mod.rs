//! Query template registry: language identifier to category-keyed query
//! patterns.
//!
//! Template sets are registered once (builtins at startup, callers may add
//! more) and never mutated afterwards; readers get `Arc` clones so no lock
//! is held during extraction. Whether a pattern is actually compatible with
//! the installed grammar is deliberately not checked here - grammar
//! versions drift independently of bundled templates, so compatibility is
//! resolved at evaluation time, per pattern.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use once_cell::sync::OnceCell;

use crate::error::ExtractError;

mod go;
mod java;
mod javascript;
mod python;
mod rust_lang;
mod typescript;

/// Ordered mapping of category name to that category's query patterns.
///
/// Categories are an open vocabulary: `functions`, `classes`, `interfaces`,
/// `imports`, `annotations`, `enums` are the baseline, and a language may
/// omit any of them or add its own (`decorators`, `traits`, `structs`).
/// A category may carry several patterns to cover syntactic variants.
#[derive(Debug, Clone, Default)]
pub struct TemplateSet {
    categories: BTreeMap<String, Vec<String>>,
}

impl TemplateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category with its patterns. Empty pattern strings are dropped.
    pub fn with_category(mut self, category: &str, patterns: &[&str]) -> Self {
        let patterns: Vec<String> = patterns
            .iter()
            .filter(|p| !p.trim().is_empty())
            .map(|p| p.to_string())
            .collect();
        if !patterns.is_empty() {
            self.categories.insert(category.to_string(), patterns);
        }
        self
    }

    /// Iterate categories in deterministic (sorted) order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(name, patterns)| (name.as_str(), patterns.as_slice()))
    }

    /// Patterns for one category.
    pub fn patterns(&self, category: &str) -> Option<&[String]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

lazy_static::lazy_static! {
    /// Global template registry, mutated only during registration.
    static ref REGISTRY: RwLock<HashMap<String, Arc<TemplateSet>>> = RwLock::new(HashMap::new());
}

/// Guard so builtin registration runs exactly once.
static BUILTINS: OnceCell<()> = OnceCell::new();

/// Register a template set for a language identifier. Re-registering a
/// language replaces its set; existing `Arc` handles stay valid.
pub fn register(language: &str, set: TemplateSet) {
    let mut registry = REGISTRY.write().unwrap();
    registry.insert(language.to_string(), Arc::new(set));
}

/// Get the template set for a language.
pub fn get(language: &str) -> Result<Arc<TemplateSet>, ExtractError> {
    register_builtins();
    let registry = REGISTRY.read().unwrap();
    registry
        .get(language)
        .cloned()
        .ok_or_else(|| ExtractError::UnsupportedLanguage(language.to_string()))
}

/// All registered language identifiers, sorted.
pub fn languages() -> Vec<String> {
    register_builtins();
    let registry = REGISTRY.read().unwrap();
    let mut langs: Vec<String> = registry.keys().cloned().collect();
    langs.sort();
    langs
}

/// Register the builtin language template sets. Idempotent; concurrent
/// callers block until the first registration completes.
pub fn register_builtins() {
    BUILTINS.get_or_init(|| {
        go::register();
        java::register();
        javascript::register();
        python::register();
        rust_lang::register();
        typescript::register();
    });
}
