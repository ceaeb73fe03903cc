//! Structural inventory types produced by extraction.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Source location span with byte offsets and line/column positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (0-indexed).
    pub start_byte: usize,
    /// End byte offset (0-indexed, exclusive).
    pub end_byte: usize,
    /// Start line (1-indexed).
    pub start_line: usize,
    /// Start column (1-indexed).
    pub start_col: usize,
    /// End line (1-indexed).
    pub end_line: usize,
    /// End column (1-indexed).
    pub end_col: usize,
}

impl Span {
    /// Create a span from a tree-sitter node.
    pub fn from_node(node: tree_sitter::Node) -> Self {
        let start = node.start_position();
        let end = node.end_position();
        Self {
            start_byte: node.start_byte(),
            end_byte: node.end_byte(),
            start_line: start.row + 1, // tree-sitter is 0-indexed
            start_col: start.column + 1,
            end_line: end.row + 1,
            end_col: end.column + 1,
        }
    }

    /// Whether `other` lies entirely within this span.
    pub fn contains(&self, other: &Span) -> bool {
        self.start_byte <= other.start_byte && other.end_byte <= self.end_byte
    }

    /// Width in bytes.
    pub fn width(&self) -> usize {
        self.end_byte.saturating_sub(self.start_byte)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start_line, self.start_col)
    }
}

/// One extracted structural entity: a declaration, import, or annotation
/// that a query pattern matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// The outer capture label of the originating pattern
    /// (e.g. "function", "constructor", "import").
    pub label: String,
    /// Primary name, present only when the originating match carried a
    /// `*.name` capture. A wildcard import, for instance, has none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Span of the whole entity.
    #[serde(flatten)]
    pub span: Span,
    /// Raw source slice covered by the span.
    pub source_text: String,
}

/// Structural inventory for one file: category name to entities in source
/// order. A category present with an empty list was supported for the
/// language but matched nothing; an absent category was never queried.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    pub categories: BTreeMap<String, Vec<Entity>>,
}

impl Inventory {
    /// Entities for a category, if that category was queried.
    pub fn category(&self, name: &str) -> Option<&[Entity]> {
        self.categories.get(name).map(Vec::as_slice)
    }

    /// Total entity count across all categories.
    pub fn total_entities(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}

/// Record of one query pattern that failed and was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub language: String,
    pub category: String,
    /// Index of the failing pattern within its category's pattern list.
    pub pattern_index: usize,
    pub message: String,
}

/// Result of extracting one file: the inventory plus everything a caller
/// needs to judge its completeness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Language identifier the file was extracted as.
    pub language: String,
    /// The structural inventory.
    pub inventory: Inventory,
    /// One record per skipped query pattern.
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
    /// True when the syntax tree contained error nodes; the inventory was
    /// still extracted from the recovered partial tree.
    pub parse_degraded: bool,
}

impl Extraction {
    /// True when every pattern ran and the tree parsed cleanly.
    pub fn is_complete(&self) -> bool {
        self.diagnostics.is_empty() && !self.parse_degraded
    }
}
