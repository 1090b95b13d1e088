use crate::remap::KindRemapTable;
use symlens_api::{
    DocumentSymbols, ProviderId, RawNodeId, RawSymbolTree, SymbolError, SymbolNode, SymbolResult,
};

pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Turns a provider-native tree into canonical symbols.
///
/// One pre-order walk over the raw arena: parents before children, siblings
/// in provider order. The walk uses an explicit stack and refuses trees that
/// revisit a node, reference a missing node, or nest past `max_depth`.
pub struct SymbolTreeBuilder<'a> {
    remap: &'a KindRemapTable,
    max_depth: usize,
}

impl<'a> SymbolTreeBuilder<'a> {
    pub fn new(remap: &'a KindRemapTable) -> Self {
        Self {
            remap,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn build(&self, raw: &RawSymbolTree, provider: &ProviderId) -> SymbolResult<DocumentSymbols> {
        let flat = self.walk(raw, provider)?;
        if flat.len() < raw.len() {
            tracing::debug!(
                "provider '{}' returned {} nodes unreachable from any root",
                provider,
                raw.len() - flat.len()
            );
        }
        let root_symbols = assemble(flat);
        let all_symbols = preorder(&root_symbols);
        Ok(DocumentSymbols {
            all_symbols,
            root_symbols,
        })
    }

    /// Pre-order list with `children` not yet attached.
    fn walk(&self, raw: &RawSymbolTree, provider: &ProviderId) -> SymbolResult<Vec<SymbolNode>> {
        let mut visited = vec![false; raw.len()];
        let mut flat: Vec<SymbolNode> = Vec::with_capacity(raw.len());
        let mut stack: Vec<(RawNodeId, Option<usize>, usize)> =
            raw.roots.iter().rev().map(|id| (*id, None, 0)).collect();

        while let Some((id, parent, depth)) = stack.pop() {
            let node = raw.get(id).ok_or_else(|| {
                invalid(provider, format!("reference to missing node {}", id.0))
            })?;
            if visited[id.0] {
                return Err(invalid(
                    provider,
                    format!("node {} ('{}') reached more than once", id.0, node.name),
                ));
            }
            visited[id.0] = true;
            if depth >= self.max_depth {
                return Err(invalid(
                    provider,
                    format!("nesting deeper than {} levels at '{}'", self.max_depth, node.name),
                ));
            }

            let index = flat.len();
            flat.push(SymbolNode {
                name: node.name.clone(),
                kind: self.remap.remap(provider, node.kind),
                range: node.range,
                index,
                parent,
                depth,
                children: Vec::new(),
            });
            stack.extend(
                node.children
                    .iter()
                    .rev()
                    .map(|child| (*child, Some(index), depth + 1)),
            );
        }

        Ok(flat)
    }
}

fn invalid(provider: &ProviderId, reason: String) -> SymbolError {
    tracing::warn!("rejecting symbol tree from '{}': {}", provider, reason);
    SymbolError::InvalidSymbolTree(reason)
}

/// Rebuild the hierarchy from a pre-order list.
///
/// Children always follow their parent, so popping from the back completes
/// every subtree before its parent is taken.
fn assemble(mut flat: Vec<SymbolNode>) -> Vec<SymbolNode> {
    let mut pending: Vec<Vec<SymbolNode>> = vec![Vec::new(); flat.len()];
    let mut roots = Vec::new();

    while let Some(mut node) = flat.pop() {
        let mut children = std::mem::take(&mut pending[node.index]);
        children.reverse();
        node.children = children;
        match node.parent {
            Some(parent) => pending[parent].push(node),
            None => roots.push(node),
        }
    }

    roots.reverse();
    roots
}

/// Every node of the assembled tree in pre-order, subtrees included.
fn preorder(roots: &[SymbolNode]) -> Vec<SymbolNode> {
    let mut all = Vec::new();
    let mut stack: Vec<&SymbolNode> = roots.iter().rev().collect();
    while let Some(node) = stack.pop() {
        all.push(node.clone());
        stack.extend(node.children.iter().rev());
    }
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProviderProfiles;
    use symlens_api::{CanonicalKind, Range};

    fn line(n: usize) -> Range {
        Range::new(n, 0, n, 10)
    }

    fn builtin() -> KindRemapTable {
        KindRemapTable::from_profiles(&ProviderProfiles::builtin())
    }

    fn names(nodes: &[SymbolNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.name.as_str()).collect()
    }

    #[test]
    fn empty_tree_builds_empty_result() {
        let table = builtin();
        let symbols = SymbolTreeBuilder::new(&table)
            .build(&RawSymbolTree::new(), &ProviderId::MARKSMAN)
            .unwrap();
        assert!(symbols.is_empty());
        assert!(symbols.root_symbols.is_empty());
    }

    #[test]
    fn preorder_flat_list_and_nested_roots() {
        let mut raw = RawSymbolTree::new();
        let class = raw.push(None, "Parser", 5, line(0));
        let new = raw.push(Some(class), "new", 9, line(1));
        raw.push(Some(new), "buf", 13, line(2));
        raw.push(Some(class), "parse", 6, line(4));
        raw.push(None, "main", 12, line(8));

        let table = builtin();
        let symbols = SymbolTreeBuilder::new(&table)
            .build(&raw, &ProviderId::new("rust-analyzer"))
            .unwrap();

        assert_eq!(
            names(&symbols.all_symbols),
            vec!["Parser", "new", "buf", "parse", "main"]
        );
        assert_eq!(names(&symbols.all_symbols[0].children), vec!["new", "parse"]);
        assert_eq!(names(&symbols.all_symbols[1].children), vec!["buf"]);
        assert!(symbols.all_symbols[2].children.is_empty());
        assert_eq!(
            symbols.all_symbols.iter().map(|s| s.index).collect::<Vec<_>>(),
            vec![0, 1, 2, 3, 4]
        );
        assert_eq!(
            symbols.all_symbols.iter().map(|s| s.parent).collect::<Vec<_>>(),
            vec![None, Some(0), Some(1), Some(0), None]
        );
        assert_eq!(
            symbols.all_symbols.iter().map(|s| s.depth).collect::<Vec<_>>(),
            vec![0, 1, 2, 1, 0]
        );

        assert_eq!(names(&symbols.root_symbols), vec!["Parser", "main"]);
        let parser = &symbols.root_symbols[0];
        assert_eq!(parser.kind, CanonicalKind::Class);
        assert_eq!(names(&parser.children), vec!["new", "parse"]);
        assert_eq!(names(&parser.children[0].children), vec!["buf"]);
        assert_eq!(parser.children[0].children[0].kind, CanonicalKind::Variable);
    }

    #[test]
    fn flat_entries_match_their_tree_nodes() {
        let mut raw = RawSymbolTree::new();
        let top = raw.push(None, "Top", 15, line(0));
        let child = raw.push(Some(top), "Child", 15, line(1));
        raw.push(Some(child), "Leaf", 15, line(2));
        raw.push(None, "Other", 15, line(4));

        let table = builtin();
        let symbols = SymbolTreeBuilder::new(&table)
            .build(&raw, &ProviderId::MARKSMAN)
            .unwrap();

        let mut from_roots = Vec::new();
        let mut stack: Vec<&SymbolNode> = symbols.root_symbols.iter().rev().collect();
        while let Some(node) = stack.pop() {
            from_roots.push(node);
            stack.extend(node.children.iter().rev());
        }
        assert_eq!(from_roots.len(), symbols.all_symbols.len());
        for (flat, nested) in symbols.all_symbols.iter().zip(from_roots) {
            assert_eq!(flat, nested);
        }
        assert_eq!(symbols.all_symbols[0].children.len(), 1);
        assert_eq!(symbols.all_symbols[1].children[0].name, "Leaf");
    }

    #[test]
    fn sibling_order_is_provider_order() {
        let mut raw = RawSymbolTree::new();
        raw.push(None, "second", 12, line(9));
        raw.push(None, "first", 12, line(1));

        let table = builtin();
        let symbols = SymbolTreeBuilder::new(&table)
            .build(&raw, &ProviderId::new("pyright"))
            .unwrap();
        assert_eq!(names(&symbols.root_symbols), vec!["second", "first"]);
    }

    #[test]
    fn heading_strings_are_remapped_per_node() {
        let mut raw = RawSymbolTree::new();
        let h1 = raw.push(None, "Title", 15, line(0));
        raw.push(Some(h1), "Section", 15, line(2));

        let table = builtin();
        let symbols = SymbolTreeBuilder::new(&table)
            .build(&raw, &ProviderId::MARKSMAN)
            .unwrap();
        assert!(
            symbols
                .all_symbols
                .iter()
                .all(|s| s.kind == CanonicalKind::Namespace)
        );
    }

    #[test]
    fn unknown_kind_codes_still_build() {
        let mut raw = RawSymbolTree::new();
        raw.push(None, "weird", 4242, line(0));

        let table = builtin();
        let symbols = SymbolTreeBuilder::new(&table)
            .build(&raw, &ProviderId::new("vendor-ls"))
            .unwrap();
        assert_eq!(symbols.all_symbols[0].kind, CanonicalKind::GENERIC_CONTAINER);
    }

    #[test]
    fn self_descendant_is_rejected() {
        let mut raw = RawSymbolTree::new();
        let root = raw.push(None, "loop", 5, line(0));
        let child = raw.push(Some(root), "child", 6, line(1));
        raw.nodes[child.0].children.push(root);

        let table = builtin();
        let err = SymbolTreeBuilder::new(&table)
            .build(&raw, &ProviderId::new("buggy"))
            .unwrap_err();
        assert!(matches!(err, SymbolError::InvalidSymbolTree(_)));
    }

    #[test]
    fn node_as_its_own_child_is_rejected() {
        let mut raw = RawSymbolTree::new();
        let root = raw.push(None, "me", 5, line(0));
        raw.nodes[root.0].children.push(root);

        let table = builtin();
        assert!(
            SymbolTreeBuilder::new(&table)
                .build(&raw, &ProviderId::new("buggy"))
                .is_err()
        );
    }

    #[test]
    fn shared_child_is_rejected() {
        let mut raw = RawSymbolTree::new();
        let a = raw.push(None, "a", 5, line(0));
        let b = raw.push(None, "b", 5, line(5));
        let shared = raw.push(Some(a), "shared", 6, line(1));
        raw.nodes[b.0].children.push(shared);

        let table = builtin();
        assert!(
            SymbolTreeBuilder::new(&table)
                .build(&raw, &ProviderId::new("buggy"))
                .is_err()
        );
    }

    #[test]
    fn dangling_reference_is_rejected() {
        let mut raw = RawSymbolTree::new();
        let root = raw.push(None, "root", 5, line(0));
        raw.nodes[root.0].children.push(RawNodeId(99));

        let table = builtin();
        let err = SymbolTreeBuilder::new(&table)
            .build(&raw, &ProviderId::new("buggy"))
            .unwrap_err();
        assert!(err.to_string().contains("missing node 99"));
    }

    #[test]
    fn nesting_past_limit_is_rejected() {
        let mut raw = RawSymbolTree::new();
        let mut parent = None;
        for depth in 0..10 {
            parent = Some(raw.push(parent, format!("level{depth}"), 3, line(depth)));
        }

        let table = builtin();
        assert!(
            SymbolTreeBuilder::new(&table)
                .with_max_depth(5)
                .build(&raw, &ProviderId::new("deep"))
                .is_err()
        );
        assert_eq!(
            SymbolTreeBuilder::new(&table)
                .with_max_depth(10)
                .build(&raw, &ProviderId::new("deep"))
                .unwrap()
                .len(),
            10
        );
    }

    #[test]
    fn builds_are_deterministic() {
        let mut raw = RawSymbolTree::new();
        let h1 = raw.push(None, "Title", 15, line(0));
        raw.push(Some(h1), "A", 15, line(2));
        raw.push(Some(h1), "B", 15, line(4));

        let table = builtin();
        let builder = SymbolTreeBuilder::new(&table);
        let first = builder.build(&raw, &ProviderId::MARKSMAN).unwrap();
        let second = builder.build(&raw, &ProviderId::MARKSMAN).unwrap();
        assert_eq!(first, second);
    }
}
