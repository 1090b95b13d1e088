use std::path::PathBuf;
use symlens_api::{DocumentSymbols, SymbolQueryService};
use symlens_core::{SymlensConfig, lsp};
use tracing::info;

pub async fn run(
    config: SymlensConfig,
    path: PathBuf,
    lsp_shape: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let facade = symlens_runtime::build_default_facade(config);

    let symbols = facade.request_document_symbols(&path).await?;
    info!(
        "{} symbols ({} roots) in {}",
        symbols.len(),
        symbols.root_symbols.len(),
        path.display()
    );

    println!("{}", render(&symbols, lsp_shape)?);
    Ok(())
}

/// Pretty JSON of the whole result, or of an LSP `documentSymbol` body.
pub(crate) fn render(symbols: &DocumentSymbols, lsp_shape: bool) -> serde_json::Result<String> {
    if lsp_shape {
        serde_json::to_string_pretty(&lsp::to_document_symbols(&symbols.root_symbols))
    } else {
        serde_json::to_string_pretty(symbols)
    }
}
