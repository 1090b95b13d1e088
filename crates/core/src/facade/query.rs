use crate::facade::SymbolQueryFacade;
use async_trait::async_trait;
use std::path::Path;
use symlens_api::{DocumentSymbols, OverviewEntry, OverviewOptions, SymbolQueryService, SymbolResult};

#[async_trait]
impl SymbolQueryService for SymbolQueryFacade {
    async fn request_document_symbols(&self, path: &Path) -> SymbolResult<DocumentSymbols> {
        let (_, symbols) = self.document_symbols(path).await?;
        Ok(symbols)
    }

    async fn request_document_overview_with(
        &self,
        path: &Path,
        options: OverviewOptions,
    ) -> SymbolResult<Vec<OverviewEntry>> {
        self.document_overview(path, options).await
    }
}
