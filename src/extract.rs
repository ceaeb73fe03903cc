//! Structural extractor: runs every template category against one parsed
//! file and assembles the inventory.
//!
//! Each pattern evaluation is guarded in isolation. A pattern that the
//! active grammar cannot compile contributes nothing and leaves a
//! diagnostic; the remaining patterns and categories still run. A category
//! whose every pattern fails yields an empty list, never a file-level
//! failure - only a missing template set or grammar aborts extraction.

use std::collections::HashSet;

use crate::error::ExtractError;
use crate::evaluate::{evaluate, CaptureEvent};
use crate::grammar::{BundledGrammars, GrammarProvider};
use crate::inventory::{Diagnostic, Entity, Extraction, Inventory, Span};
use crate::templates;

/// Extracts structural inventories from source files.
pub struct Extractor {
    provider: Box<dyn GrammarProvider>,
}

impl Extractor {
    /// Extractor over the grammars bundled into this binary.
    pub fn new() -> Self {
        Self::with_provider(Box::new(BundledGrammars))
    }

    /// Extractor over a caller-supplied grammar provider.
    pub fn with_provider(provider: Box<dyn GrammarProvider>) -> Self {
        Self { provider }
    }

    /// Extract the structural inventory of one file.
    ///
    /// Fails only when the language has no registered template set or no
    /// grammar. Malformed source is extracted from the recovered partial
    /// tree, with `parse_degraded` set on the result.
    pub fn extract(&self, language: &str, source: &[u8]) -> Result<Extraction, ExtractError> {
        let templates = templates::get(language)?;
        let grammar = self.provider.compile(language)?;
        let tree = self.provider.parse(&grammar, source)?;
        let root = tree.root_node();

        let parse_degraded = root.has_error();
        if parse_degraded {
            tracing::debug!(language, "syntax tree has error nodes; inventory may be incomplete");
        }

        let mut inventory = Inventory::default();
        let mut diagnostics = Vec::new();

        for (category, patterns) in templates.categories() {
            let mut entities: Vec<Entity> = Vec::new();

            for (pattern_index, pattern) in patterns.iter().enumerate() {
                match evaluate(&grammar, root, source, language, pattern) {
                    Ok(events) => entities.extend(group_entities(&events, source)),
                    Err(err) => {
                        tracing::warn!(
                            language,
                            category,
                            pattern_index,
                            error = %err,
                            "query pattern skipped"
                        );
                        diagnostics.push(Diagnostic {
                            language: language.to_string(),
                            category: category.to_string(),
                            pattern_index,
                            message: err.to_string(),
                        });
                    }
                }
            }

            // Merge contributions from all patterns into source order and
            // collapse exact (span, label) duplicates. Distinct labels on
            // the same span are legitimate variants and both survive.
            entities.sort_by(|a, b| {
                a.span
                    .start_byte
                    .cmp(&b.span.start_byte)
                    .then_with(|| a.span.end_byte.cmp(&b.span.end_byte))
                    .then_with(|| a.label.cmp(&b.label))
            });
            let mut seen: HashSet<(usize, usize, String)> = HashSet::new();
            entities.retain(|e| seen.insert((e.span.start_byte, e.span.end_byte, e.label.clone())));

            inventory.categories.insert(category.to_string(), entities);
        }

        Ok(Extraction {
            language: language.to_string(),
            inventory,
            diagnostics,
            parse_degraded,
        })
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract with the bundled grammars.
pub fn extract(language: &str, source: &[u8]) -> Result<Extraction, ExtractError> {
    Extractor::new().extract(language, source)
}

/// Group one pattern's capture events into entities.
///
/// Pattern authors may emit captures in any order, so grouping is by
/// enclosing span rather than list position: each undotted label opens an
/// entity, and a `*.name` capture attaches to the innermost entity whose
/// span contains it.
fn group_entities(events: &[CaptureEvent], source: &[u8]) -> Vec<Entity> {
    let mut entities: Vec<Entity> = events
        .iter()
        .filter(|e| !e.label.contains('.'))
        .map(|e| Entity {
            label: e.label.clone(),
            name: None,
            span: Span::from_node(e.node),
            source_text: e.node.utf8_text(source).unwrap_or("").to_string(),
        })
        .collect();

    for event in events.iter().filter(|e| e.label.ends_with(".name")) {
        let span = Span::from_node(event.node);
        let mut target: Option<usize> = None;
        for (index, entity) in entities.iter().enumerate() {
            if !entity.span.contains(&span) {
                continue;
            }
            match target {
                Some(current) if entities[current].span.width() <= entity.span.width() => {}
                _ => target = Some(index),
            }
        }
        if let Some(index) = target {
            if entities[index].name.is_none() {
                let name = event.node.utf8_text(source).unwrap_or("");
                if !name.is_empty() {
                    entities[index].name = Some(name.to_string());
                }
            }
        }
    }

    entities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_entities_attaches_name_to_innermost() {
        // Nested classes: the inner class name must attach to the inner
        // entity even though the outer entity's span also contains it.
        let source = b"class Outer { class Inner { } }";
        let provider = BundledGrammars;
        let grammar = provider.compile("java").unwrap();
        let tree = provider.parse(&grammar, source).unwrap();

        let events = evaluate(
            &grammar,
            tree.root_node(),
            source,
            "java",
            "(class_declaration name: (identifier) @class.name) @class",
        )
        .unwrap();

        let entities = group_entities(&events, source);
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].name.as_deref(), Some("Outer"));
        assert_eq!(entities[1].name.as_deref(), Some("Inner"));
    }

    #[test]
    fn test_unnamed_captures_produce_unnamed_entities() {
        let source = b"import java.util.*;\nimport java.io.File;\nclass A {}";
        let provider = BundledGrammars;
        let grammar = provider.compile("java").unwrap();
        let tree = provider.parse(&grammar, source).unwrap();

        let events = evaluate(
            &grammar,
            tree.root_node(),
            source,
            "java",
            "(import_declaration) @import",
        )
        .unwrap();

        let entities = group_entities(&events, source);
        assert_eq!(entities.len(), 2);
        assert!(entities.iter().all(|e| e.name.is_none()));
    }

    #[test]
    fn test_exact_duplicates_collapse_but_label_variants_survive() {
        let source = b"class A { void m() {} }";
        templates::register(
            "test-dup-lang",
            templates::TemplateSet::new().with_category(
                "functions",
                &[
                    // Same span, same label, twice: collapses to one.
                    "(method_declaration name: (identifier) @function.name) @function",
                    "(method_declaration name: (identifier) @function.name) @function",
                    // Same span, different label: kept as a variant.
                    "(method_declaration) @callable",
                ],
            ),
        );

        struct JavaAs(&'static str);
        impl GrammarProvider for JavaAs {
            fn compile(&self, _language: &str) -> Result<tree_sitter::Language, ExtractError> {
                BundledGrammars.compile(self.0)
            }
        }

        let extractor = Extractor::with_provider(Box::new(JavaAs("java")));
        let result = extractor.extract("test-dup-lang", source).unwrap();
        let functions = result.inventory.category("functions").unwrap();

        assert_eq!(functions.len(), 2, "one collapsed duplicate plus one label variant");
        assert!(functions.iter().any(|e| e.label == "function"));
        assert!(functions.iter().any(|e| e.label == "callable"));
    }
}
