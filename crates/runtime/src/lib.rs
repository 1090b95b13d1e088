use std::sync::Arc;
use symlens_core::{SymbolQueryFacade, SymbolQueryFacadeBuilder, SymlensConfig};

/// Facade builder with every in-process provider registered.
///
/// Providers registered afterwards are only consulted for paths these
/// built-ins do not claim.
pub fn default_builder(config: SymlensConfig) -> SymbolQueryFacadeBuilder {
    SymbolQueryFacade::builder(config).register(Arc::new(symlens_markdown::HeadingProvider::new()))
}

/// Bootstraps a symbol query facade with all available providers.
pub fn build_default_facade(config: SymlensConfig) -> SymbolQueryFacade {
    let facade = default_builder(config).build();
    tracing::debug!(
        "Facade ready with providers {:?} for {:?}",
        facade.registry().provider_ids(),
        facade.registry().languages()
    );
    facade
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(component: &str, config: &SymlensConfig, verbose: bool) -> Option<impl Drop + use<>> {
    symlens_core::logging::init_logging(component, &config.logging, verbose)
}

#[cfg(test)]
mod tests {
    use super::*;
    use symlens_api::{Language, ProviderId};

    #[test]
    fn default_facade_serves_markdown() {
        let facade = build_default_facade(SymlensConfig::default());
        assert_eq!(facade.registry().languages(), vec![Language::MARKDOWN]);
        assert_eq!(
            facade.registry().provider_ids(),
            vec![ProviderId::MARKDOWN_HEADINGS]
        );
    }
}
