use std::path::PathBuf;
use std::sync::Arc;
use symlens_api::{Language, OverviewOptions, ProviderId, SymbolQueryService};
use symlens_core::provider::RecordedProvider;
use symlens_core::{SymbolQueryFacade, SymlensConfig};
use tracing::info;

pub struct ReplayArgs {
    pub provider: String,
    pub language: String,
    pub overview: bool,
    pub filter_low_level: bool,
}

pub async fn run(
    config: SymlensConfig,
    response: PathBuf,
    args: ReplayArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let recorded = RecordedProvider::load_response(&response)?;
    let provider = ProviderId::new(args.provider);
    info!("Replaying {} as '{}'", response.display(), provider);

    // The recorded provider is the only one registered, so built-in
    // providers cannot claim the response path.
    let facade = SymbolQueryFacade::builder(config)
        .register(Arc::new(
            RecordedProvider::new(provider, Language::from(args.language))
                .with_response(response.clone(), &recorded),
        ))
        .build();

    if args.overview {
        let options = OverviewOptions {
            filter_low_level: args.filter_low_level,
            depth: 0,
        };
        let entries = facade
            .request_document_overview_with(&response, options)
            .await?;
        crate::overview::print_entries(&entries, false)
    } else {
        let symbols = facade.request_document_symbols(&response).await?;
        println!("{}", crate::symbols::render(&symbols, false)?);
        Ok(())
    }
}
