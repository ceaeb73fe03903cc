//! Capture normalizer: converts either raw capture shape into one
//! canonical ordered event list.
//!
//! Everything above this function depends on a single shape; nothing else
//! in the crate branches on how the query engine returned its captures.

use crate::evaluate::{CaptureEvent, RawCaptures};

/// Normalize raw captures into document order: ascending start byte, with
/// a wrapping node sorted before the nodes it contains, label as the final
/// tiebreaker. Overlapping and nested events are all preserved.
pub fn events(raw: RawCaptures<'_>) -> Vec<CaptureEvent<'_>> {
    let mut events: Vec<CaptureEvent> = match raw {
        RawCaptures::Flat(pairs) => pairs
            .into_iter()
            .map(|(node, label)| CaptureEvent { node, label })
            .collect(),
        RawCaptures::Grouped(groups) => groups
            .into_iter()
            .flat_map(|(label, nodes)| {
                nodes.into_iter().map(move |node| CaptureEvent {
                    node,
                    label: label.clone(),
                })
            })
            .collect(),
    };

    events.sort_by(|a, b| {
        a.node
            .start_byte()
            .cmp(&b.node.start_byte())
            .then_with(|| b.node.end_byte().cmp(&a.node.end_byte()))
            .then_with(|| a.label.cmp(&b.label))
    });
    events
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::grammar::{BundledGrammars, GrammarProvider};
    use crate::evaluate::evaluate;

    const SOURCE: &[u8] = b"public class A { void m() {} }\nclass B { }\n";

    // Nodes cannot be fabricated, so both shapes are built from a real
    // parsed tree and must normalize to the same event list.
    #[test]
    fn test_flat_and_grouped_shapes_normalize_identically() {
        let provider = BundledGrammars;
        let grammar = provider.compile("java").unwrap();
        let tree = provider.parse(&grammar, SOURCE).unwrap();

        let canonical = evaluate(
            &grammar,
            tree.root_node(),
            SOURCE,
            "java",
            "(class_declaration name: (identifier) @class.name) @class",
        )
        .unwrap();
        assert_eq!(canonical.len(), 4, "two classes, two captures each");

        // Rebuild the raw shapes from the canonical events, scrambled.
        let mut flat: Vec<_> = canonical
            .iter()
            .map(|e| (e.node, e.label.clone()))
            .collect();
        flat.reverse();

        let mut grouped: BTreeMap<String, Vec<_>> = BTreeMap::new();
        for e in &canonical {
            grouped.entry(e.label.clone()).or_default().push(e.node);
        }

        let from_flat = events(RawCaptures::Flat(flat));
        let from_grouped = events(RawCaptures::Grouped(grouped));

        let key = |evs: &[CaptureEvent]| -> Vec<(usize, usize, String)> {
            evs.iter()
                .map(|e| (e.node.start_byte(), e.node.end_byte(), e.label.clone()))
                .collect()
        };
        assert_eq!(key(&from_flat), key(&from_grouped));
        assert_eq!(key(&from_flat), key(&canonical));
    }

    #[test]
    fn test_wrapping_node_sorts_before_contained_name() {
        let provider = BundledGrammars;
        let grammar = provider.compile("java").unwrap();
        let tree = provider.parse(&grammar, SOURCE).unwrap();

        let evs = evaluate(
            &grammar,
            tree.root_node(),
            SOURCE,
            "java",
            "(method_declaration name: (identifier) @function.name) @function",
        )
        .unwrap();

        assert_eq!(evs[0].label, "function");
        assert_eq!(evs[1].label, "function.name");
        assert!(evs[0].node.start_byte() <= evs[1].node.start_byte());
        assert!(evs[1].node.end_byte() <= evs[0].node.end_byte());
    }
}
