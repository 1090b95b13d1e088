use super::symbol::Range;
use serde::{Deserialize, Serialize};

/// Index of a node inside a [`RawSymbolTree`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct RawNodeId(pub usize);

/// A symbol as reported by a provider, before normalization.
///
/// `kind` is the provider's own classification code and carries no meaning
/// outside that provider.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RawSymbolNode {
    pub name: String,
    pub kind: u32,
    pub range: Range,
    pub children: Vec<RawNodeId>,
}

/// Provider-native symbol tree for one file.
///
/// Nodes live in an arena and reference children by id. Providers are
/// expected to hand over a proper tree; nothing here enforces it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSymbolTree {
    pub nodes: Vec<RawSymbolNode>,
    pub roots: Vec<RawNodeId>,
}

impl RawSymbolTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node under `parent` (or as a root) and return its id.
    ///
    /// A `parent` that does not exist leaves the node detached.
    pub fn push(
        &mut self,
        parent: Option<RawNodeId>,
        name: impl Into<String>,
        kind: u32,
        range: Range,
    ) -> RawNodeId {
        let id = RawNodeId(self.nodes.len());
        self.nodes.push(RawSymbolNode {
            name: name.into(),
            kind,
            range,
            children: Vec::new(),
        });
        match parent {
            Some(parent) => {
                if let Some(node) = self.nodes.get_mut(parent.0) {
                    node.children.push(id);
                }
            }
            None => self.roots.push(id),
        }
        id
    }

    pub fn get(&self, id: RawNodeId) -> Option<&RawSymbolNode> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
