use crate::error::Result;
use crate::lsp::raw_tree_from_response;
use lsp_types::DocumentSymbolResponse;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use symlens_api::{Language, ProviderError, ProviderId, RawSymbolProvider, RawSymbolTree};
use tokio_util::sync::CancellationToken;

/// Replays captured `documentSymbol` responses.
///
/// Lets a response recorded from a real provider process be normalized
/// offline, under that provider's id so its profile still applies.
pub struct RecordedProvider {
    id: ProviderId,
    language: Language,
    responses: HashMap<PathBuf, RawSymbolTree>,
}

impl RecordedProvider {
    pub fn new(id: ProviderId, language: Language) -> Self {
        Self {
            id,
            language,
            responses: HashMap::new(),
        }
    }

    pub fn with_response(mut self, path: impl Into<PathBuf>, response: &DocumentSymbolResponse) -> Self {
        self.responses
            .insert(path.into(), raw_tree_from_response(response));
        self
    }

    pub fn with_tree(mut self, path: impl Into<PathBuf>, tree: RawSymbolTree) -> Self {
        self.responses.insert(path.into(), tree);
        self
    }

    /// Read a response captured as JSON.
    pub fn load_response(file: &Path) -> Result<DocumentSymbolResponse> {
        let text = std::fs::read_to_string(file)?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl RawSymbolProvider for RecordedProvider {
    fn id(&self) -> ProviderId {
        self.id.clone()
    }

    fn language(&self) -> Language {
        self.language.clone()
    }

    fn supports_path(&self, path: &Path) -> bool {
        self.responses.contains_key(path)
    }

    fn raw_symbols(
        &self,
        path: &Path,
        cancel: &CancellationToken,
    ) -> std::result::Result<RawSymbolTree, ProviderError> {
        if cancel.is_cancelled() {
            return Err(ProviderError::Cancelled);
        }
        self.responses
            .get(path)
            .cloned()
            .ok_or_else(|| ProviderError::UnsupportedFile(path.display().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use symlens_api::Range;

    #[test]
    fn replays_recorded_tree_for_known_path() {
        let mut tree = RawSymbolTree::new();
        tree.push(None, "main", 12, Range::new(0, 0, 3, 1));
        let provider = RecordedProvider::new(ProviderId::RECORDED, Language::GO)
            .with_tree("cmd/main.go", tree.clone());

        assert!(provider.supports_path(Path::new("cmd/main.go")));
        assert!(!provider.supports_path(Path::new("cmd/other.go")));
        let got = provider
            .raw_symbols(Path::new("cmd/main.go"), &CancellationToken::new())
            .unwrap();
        assert_eq!(got, tree);
    }

    #[test]
    fn unknown_path_is_unsupported() {
        let provider = RecordedProvider::new(ProviderId::RECORDED, Language::GO);
        let err = provider
            .raw_symbols(Path::new("x.go"), &CancellationToken::new())
            .unwrap_err();
        assert!(matches!(err, ProviderError::UnsupportedFile(_)));
    }

    #[test]
    fn cancelled_requests_stop_early() {
        let provider = RecordedProvider::new(ProviderId::RECORDED, Language::GO)
            .with_tree("a.go", RawSymbolTree::new());
        let cancel = CancellationToken::new();
        cancel.cancel();
        assert_eq!(
            provider.raw_symbols(Path::new("a.go"), &cancel),
            Err(ProviderError::Cancelled)
        );
    }

    #[test]
    fn loads_response_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let body = json!([{
            "name": "Config",
            "kind": 23,
            "range": { "start": { "line": 0, "character": 0 }, "end": { "line": 4, "character": 1 } },
            "selectionRange": { "start": { "line": 0, "character": 5 }, "end": { "line": 0, "character": 11 } }
        }]);
        write!(file, "{body}").unwrap();

        let response = RecordedProvider::load_response(file.path()).unwrap();
        let provider = RecordedProvider::new(ProviderId::new("gopls"), Language::GO)
            .with_response("config.go", &response);
        let tree = provider
            .raw_symbols(Path::new("config.go"), &CancellationToken::new())
            .unwrap();
        assert_eq!(tree.nodes[0].name, "Config");
        assert_eq!(tree.nodes[0].kind, 23);
    }
}
