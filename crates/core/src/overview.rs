use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use symlens_api::{CanonicalKind, OverviewEntry, SymbolNode};

/// How a provider's symbol tree is turned into an overview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverviewPolicy {
    /// Root symbols only, plus as many levels as the caller asks for.
    #[default]
    TopLevel,
    /// Every symbol of the tree, hierarchy discarded.
    FlattenAll,
}

/// A node that can be walked for an overview.
pub trait OutlineNode: Sized {
    fn outline_children(&self) -> &[Self];
    fn to_entry(&self) -> OverviewEntry;
}

impl OutlineNode for SymbolNode {
    fn outline_children(&self) -> &[Self] {
        &self.children
    }

    fn to_entry(&self) -> OverviewEntry {
        self.entry()
    }
}

/// Already-flat sequences walk as childless roots.
impl OutlineNode for OverviewEntry {
    fn outline_children(&self) -> &[Self] {
        &[]
    }

    fn to_entry(&self) -> OverviewEntry {
        self.clone()
    }
}

pub struct OverviewFlattener;

impl OverviewFlattener {
    pub fn flatten<N: OutlineNode>(roots: &[N], policy: OverviewPolicy) -> Vec<OverviewEntry> {
        Self::flatten_where(roots, policy, 0, |_, _| true)
    }

    /// Flatten `roots` under `policy`, keeping only nodes accepted by `keep`.
    ///
    /// `keep` receives each node and its nesting depth. Rejected nodes are
    /// skipped but their descendants are still visited. `depth` is the number
    /// of levels below the roots a `TopLevel` walk descends into.
    ///
    /// Entries come back ordered by range start. The sort is stable, so a
    /// parent and its first child sharing a start position keep pre-order.
    pub fn flatten_where<N, F>(
        roots: &[N],
        policy: OverviewPolicy,
        depth: usize,
        mut keep: F,
    ) -> Vec<OverviewEntry>
    where
        N: OutlineNode,
        F: FnMut(&N, usize) -> bool,
    {
        let max_level = match policy {
            OverviewPolicy::TopLevel => depth,
            OverviewPolicy::FlattenAll => usize::MAX,
        };

        let mut entries = Vec::new();
        let mut stack: Vec<(&N, usize)> = roots.iter().rev().map(|n| (n, 0)).collect();
        while let Some((node, level)) = stack.pop() {
            if keep(node, level) {
                entries.push(node.to_entry());
            }
            if level < max_level {
                stack.extend(
                    node.outline_children()
                        .iter()
                        .rev()
                        .map(|child| (child, level + 1)),
                );
            }
        }

        entries.sort_by_key(|e| e.range.start());
        entries
    }
}

/// Group overview entries by kind, names in document order.
pub fn summarize(entries: &[OverviewEntry]) -> BTreeMap<CanonicalKind, Vec<String>> {
    let mut summary: BTreeMap<CanonicalKind, Vec<String>> = BTreeMap::new();
    for entry in entries {
        summary.entry(entry.kind).or_default().push(entry.name.clone());
    }
    summary
}
