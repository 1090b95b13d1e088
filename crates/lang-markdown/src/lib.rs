pub mod parser;

pub use parser::{HEADING_KIND, Heading, heading_tree, scan_headings};

use std::path::Path;
use symlens_api::{Language, ProviderError, ProviderId, RawSymbolProvider, RawSymbolTree};
use tokio_util::sync::CancellationToken;

/// In-process markdown heading provider.
///
/// Answers like a markdown language server: every heading is reported with
/// the string-literal kind code and sub-headings nest under their parents.
/// Normalizing that output is the core's job, not this provider's.
pub struct HeadingProvider {
    id: ProviderId,
}

impl HeadingProvider {
    pub fn new() -> Self {
        Self {
            id: ProviderId::MARKDOWN_HEADINGS,
        }
    }

    /// Report under another provider id, e.g. to stand in for Marksman.
    pub fn with_id(id: ProviderId) -> Self {
        Self { id }
    }
}

impl Default for HeadingProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RawSymbolProvider for HeadingProvider {
    fn id(&self) -> ProviderId {
        self.id.clone()
    }

    fn language(&self) -> Language {
        Language::MARKDOWN
    }

    fn supports_path(&self, path: &Path) -> bool {
        Language::from_path(path) == Language::MARKDOWN
    }

    fn raw_symbols(
        &self,
        path: &Path,
        cancel: &CancellationToken,
    ) -> Result<RawSymbolTree, ProviderError> {
        if !self.supports_path(path) {
            return Err(ProviderError::UnsupportedFile(path.display().to_string()));
        }
        let source = std::fs::read_to_string(path)
            .map_err(|e| ProviderError::Request(format!("cannot read {}: {}", path.display(), e)))?;
        if cancel.is_cancelled() {
            return Err(ProviderError::Cancelled);
        }

        let tree = heading_tree(&source);
        tracing::debug!("{} headings in {}", tree.len(), path.display());
        Ok(tree)
    }
}
