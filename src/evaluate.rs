//! Query evaluator: runs one query pattern against a parsed tree.
//!
//! This is the only module that touches the grammar engine's query API.
//! The engine's raw capture output has taken two shapes across versions
//! (a flat ordered list of pairs, and a mapping grouped by label); both are
//! modeled by [`RawCaptures`] and funneled through the normalizer so every
//! caller sees one canonical ordered event list.

use std::collections::BTreeMap;

use streaming_iterator::StreamingIterator;
use tree_sitter::{Language, Node, Query, QueryCursor};

use crate::error::QueryCompileError;
use crate::normalize;

/// One capture: a syntax-tree node tagged with its capture label.
///
/// Events from the same match may reference overlapping or nested nodes
/// (an outer declaration node and an inner name node); all are kept.
#[derive(Debug, Clone)]
pub struct CaptureEvent<'t> {
    pub node: Node<'t>,
    pub label: String,
}

/// Raw capture output as the underlying query engine produces it.
#[derive(Debug, Clone)]
pub enum RawCaptures<'t> {
    /// Ordered (node, label) pairs in tree traversal order.
    Flat(Vec<(Node<'t>, String)>),
    /// Nodes grouped under their capture label.
    Grouped(BTreeMap<String, Vec<Node<'t>>>),
}

/// Evaluate one query pattern against `root`, returning the canonical
/// ordered capture event list.
///
/// Fails with [`QueryCompileError`] when the pattern references a node
/// type, field name, or anchor the active grammar does not provide.
pub fn evaluate<'t>(
    grammar: &Language,
    root: Node<'t>,
    source: &[u8],
    language: &str,
    pattern: &str,
) -> Result<Vec<CaptureEvent<'t>>, QueryCompileError> {
    let query = Query::new(grammar, pattern).map_err(|e| QueryCompileError {
        language: language.to_string(),
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, root, source);

    let mut pairs = Vec::new();
    while let Some(m) = matches.next() {
        for capture in m.captures {
            let label = query.capture_names()[capture.index as usize];
            pairs.push((capture.node, label.to_string()));
        }
    }

    Ok(normalize::events(RawCaptures::Flat(pairs)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{BundledGrammars, GrammarProvider};

    const SOURCE: &[u8] = b"public class A { void m() {} void n() {} }";

    #[test]
    fn test_evaluate_yields_labeled_events() {
        let provider = BundledGrammars;
        let grammar = provider.compile("java").unwrap();
        let tree = provider.parse(&grammar, SOURCE).unwrap();

        let events = evaluate(
            &grammar,
            tree.root_node(),
            SOURCE,
            "java",
            "(method_declaration name: (identifier) @function.name) @function",
        )
        .unwrap();

        let names: Vec<&str> = events
            .iter()
            .filter(|e| e.label == "function.name")
            .map(|e| e.node.utf8_text(SOURCE).unwrap())
            .collect();
        assert_eq!(names, vec!["m", "n"]);
        assert_eq!(events.iter().filter(|e| e.label == "function").count(), 2);
    }

    #[test]
    fn test_stale_pattern_reports_compile_error() {
        let provider = BundledGrammars;
        let grammar = provider.compile("java").unwrap();
        let tree = provider.parse(&grammar, SOURCE).unwrap();

        // Field dropped by the grammar: import_declaration has no "asterisk".
        let err = evaluate(
            &grammar,
            tree.root_node(),
            SOURCE,
            "java",
            r#"(import_declaration asterisk: "*") @import"#,
        )
        .unwrap_err();

        assert_eq!(err.language, "java");
        assert!(err.pattern.contains("asterisk"));
    }

    #[test]
    fn test_events_preserve_nested_captures() {
        let provider = BundledGrammars;
        let grammar = provider.compile("java").unwrap();
        let tree = provider.parse(&grammar, SOURCE).unwrap();

        let events = evaluate(
            &grammar,
            tree.root_node(),
            SOURCE,
            "java",
            "(class_declaration name: (identifier) @class.name) @class",
        )
        .unwrap();

        // Both the wrapping node and the inner name node survive.
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].label, "class");
        assert_eq!(events[1].label, "class.name");
        assert!(events[0].node.byte_range().contains(&events[1].node.start_byte()));
    }
}
