use std::path::PathBuf;
use symlens_api::{OverviewEntry, OverviewOptions, SymbolQueryService};
use symlens_core::{SymlensConfig, summarize};

pub async fn run(
    config: SymlensConfig,
    path: PathBuf,
    filter_low_level: bool,
    depth: usize,
    summary: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let facade = symlens_runtime::build_default_facade(config);
    let options = OverviewOptions {
        filter_low_level,
        depth,
    };

    let entries = facade.request_document_overview_with(&path, options).await?;
    print_entries(&entries, summary)
}

pub(crate) fn print_entries(
    entries: &[OverviewEntry],
    summary: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !summary {
        println!("{}", serde_json::to_string_pretty(entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("(no symbols)");
    }
    for (kind, names) in summarize(entries) {
        println!("{} ({}): {}", kind, names.len(), names.join(", "));
    }
    Ok(())
}
