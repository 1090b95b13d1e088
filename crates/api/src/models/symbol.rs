use super::kind::CanonicalKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Zero-based source span, LSP convention.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
pub struct Range {
    pub start_line: usize,
    pub start_col: usize,
    pub end_line: usize,
    pub end_col: usize,
}

impl Range {
    pub fn new(start_line: usize, start_col: usize, end_line: usize, end_col: usize) -> Self {
        Self {
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    pub fn start(&self) -> (usize, usize) {
        (self.start_line, self.start_col)
    }

    /// Document order: `self` starts no later than `other`.
    pub fn precedes(&self, other: &Range) -> bool {
        self.start() <= other.start()
    }
}

/// A normalized symbol. Built per query and never mutated afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct SymbolNode {
    pub name: String,
    pub kind: CanonicalKind,
    pub range: Range,
    /// Position in the pre-order flattening of the document tree.
    pub index: usize,
    /// Document-order index of the parent, `None` for roots.
    pub parent: Option<usize>,
    /// Nesting depth, 0 for roots.
    pub depth: usize,
    pub children: Vec<SymbolNode>,
}

impl SymbolNode {
    pub fn entry(&self) -> OverviewEntry {
        OverviewEntry {
            name: self.name.clone(),
            kind: self.kind,
            range: self.range,
        }
    }
}

/// Projection of a symbol without hierarchy, used for overviews.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct OverviewEntry {
    pub name: String,
    pub kind: CanonicalKind,
    pub range: Range,
}

/// Result of `request_document_symbols`.
///
/// `all_symbols` lists every symbol in pre-order, each with its full subtree;
/// `root_symbols` holds the same nodes for the top level only.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
pub struct DocumentSymbols {
    pub all_symbols: Vec<SymbolNode>,
    pub root_symbols: Vec<SymbolNode>,
}

impl DocumentSymbols {
    pub fn is_empty(&self) -> bool {
        self.all_symbols.is_empty()
    }

    pub fn len(&self) -> usize {
        self.all_symbols.len()
    }

    pub fn into_parts(self) -> (Vec<SymbolNode>, Vec<SymbolNode>) {
        (self.all_symbols, self.root_symbols)
    }
}
