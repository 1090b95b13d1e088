//! Conversion between LSP `documentSymbol` payloads and symlens models.

use lsp_types::{DocumentSymbol, DocumentSymbolResponse, SymbolInformation, SymbolKind};
use symlens_api::{CanonicalKind, Range, RawNodeId, RawSymbolTree, SymbolNode};

/// Numeric wire code of an LSP symbol kind, preserved even when outside the
/// protocol's table. Negative codes collapse to 0.
pub fn kind_code(kind: SymbolKind) -> u32 {
    serde_json::to_value(kind)
        .ok()
        .and_then(|v| v.as_u64())
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(0)
}

pub fn range_from_lsp(range: lsp_types::Range) -> Range {
    Range {
        start_line: range.start.line as usize,
        start_col: range.start.character as usize,
        end_line: range.end.line as usize,
        end_col: range.end.character as usize,
    }
}

pub fn range_to_lsp(range: Range) -> lsp_types::Range {
    lsp_types::Range {
        start: lsp_types::Position::new(range.start_line as u32, range.start_col as u32),
        end: lsp_types::Position::new(range.end_line as u32, range.end_col as u32),
    }
}

/// Convert a provider response into a raw tree.
///
/// Nested responses keep their hierarchy and child order. Flat responses
/// carry no hierarchy, so every entry becomes a root in reported order.
pub fn raw_tree_from_response(response: &DocumentSymbolResponse) -> RawSymbolTree {
    match response {
        DocumentSymbolResponse::Nested(symbols) => raw_tree_from_nested(symbols),
        DocumentSymbolResponse::Flat(symbols) => raw_tree_from_flat(symbols),
    }
}

fn raw_tree_from_nested(symbols: &[DocumentSymbol]) -> RawSymbolTree {
    let mut tree = RawSymbolTree::new();
    let mut stack: Vec<(Option<RawNodeId>, &DocumentSymbol)> =
        symbols.iter().rev().map(|s| (None, s)).collect();

    while let Some((parent, symbol)) = stack.pop() {
        let id = tree.push(
            parent,
            symbol.name.clone(),
            kind_code(symbol.kind),
            range_from_lsp(symbol.range),
        );
        if let Some(children) = &symbol.children {
            stack.extend(children.iter().rev().map(|child| (Some(id), child)));
        }
    }
    tree
}

fn raw_tree_from_flat(symbols: &[SymbolInformation]) -> RawSymbolTree {
    let mut tree = RawSymbolTree::new();
    for symbol in symbols {
        tree.push(
            None,
            symbol.name.clone(),
            kind_code(symbol.kind),
            range_from_lsp(symbol.location.range),
        );
    }
    tree
}

/// Render normalized symbols back into a nested LSP response body.
///
/// Symbols carry no separate selection range, so the full range is used.
pub fn to_document_symbols(symbols: &[SymbolNode]) -> Vec<DocumentSymbol> {
    symbols.iter().map(to_document_symbol).collect()
}

fn to_document_symbol(symbol: &SymbolNode) -> DocumentSymbol {
    let range = range_to_lsp(symbol.range);

    #[allow(deprecated)]
    DocumentSymbol {
        name: symbol.name.clone(),
        detail: None,
        kind: symbol_kind(symbol.kind),
        tags: None,
        deprecated: None,
        range,
        selection_range: range,
        children: if symbol.children.is_empty() {
            None
        } else {
            Some(to_document_symbols(&symbol.children))
        },
    }
}

pub fn symbol_kind(kind: CanonicalKind) -> SymbolKind {
    match kind {
        CanonicalKind::File => SymbolKind::FILE,
        CanonicalKind::Module => SymbolKind::MODULE,
        CanonicalKind::Namespace => SymbolKind::NAMESPACE,
        CanonicalKind::Package => SymbolKind::PACKAGE,
        CanonicalKind::Class => SymbolKind::CLASS,
        CanonicalKind::Method => SymbolKind::METHOD,
        CanonicalKind::Property => SymbolKind::PROPERTY,
        CanonicalKind::Field => SymbolKind::FIELD,
        CanonicalKind::Constructor => SymbolKind::CONSTRUCTOR,
        CanonicalKind::Enum => SymbolKind::ENUM,
        CanonicalKind::Interface => SymbolKind::INTERFACE,
        CanonicalKind::Function => SymbolKind::FUNCTION,
        CanonicalKind::Variable => SymbolKind::VARIABLE,
        CanonicalKind::Constant => SymbolKind::CONSTANT,
        CanonicalKind::String => SymbolKind::STRING,
        CanonicalKind::Number => SymbolKind::NUMBER,
        CanonicalKind::Boolean => SymbolKind::BOOLEAN,
        CanonicalKind::Array => SymbolKind::ARRAY,
        CanonicalKind::Object => SymbolKind::OBJECT,
        CanonicalKind::Key => SymbolKind::KEY,
        CanonicalKind::Null => SymbolKind::NULL,
        CanonicalKind::EnumMember => SymbolKind::ENUM_MEMBER,
        CanonicalKind::Struct => SymbolKind::STRUCT,
        CanonicalKind::Event => SymbolKind::EVENT,
        CanonicalKind::Operator => SymbolKind::OPERATOR,
        CanonicalKind::TypeParameter => SymbolKind::TYPE_PARAMETER,
    }
}
