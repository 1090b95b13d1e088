use crate::error::SymbolResult;
use crate::models::{DocumentSymbols, OverviewEntry};
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Caller knobs for an overview request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OverviewOptions {
    /// Drop entries classified as low-level. Off unless asked for.
    #[serde(default)]
    pub filter_low_level: bool,
    /// Extra nesting levels below the roots for providers using the
    /// top-level overview. Ignored by providers whose overview is already flat.
    #[serde(default)]
    pub depth: usize,
}

/// Symbol queries over a single document.
#[async_trait]
pub trait SymbolQueryService: Send + Sync {
    /// All symbols of the file in document order, plus the root symbols.
    async fn request_document_symbols(&self, path: &Path) -> SymbolResult<DocumentSymbols>;

    /// Overview of the file with explicit options.
    async fn request_document_overview_with(
        &self,
        path: &Path,
        options: OverviewOptions,
    ) -> SymbolResult<Vec<OverviewEntry>>;

    /// Overview of the file, optionally without low-level symbols.
    async fn request_document_overview(
        &self,
        path: &Path,
        filter_low_level: bool,
    ) -> SymbolResult<Vec<OverviewEntry>> {
        let options = OverviewOptions {
            filter_low_level,
            ..OverviewOptions::default()
        };
        self.request_document_overview_with(path, options).await
    }
}
