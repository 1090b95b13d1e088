use std::path::Path;
use std::sync::Arc;
use symlens_api::{Language, ProviderId, RawSymbolProvider};

/// Registered providers, consulted in registration order.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn RawSymbolProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, provider: Arc<dyn RawSymbolProvider>) {
        tracing::info!(
            "Registered provider '{}' for {}",
            provider.id(),
            provider.language()
        );
        self.providers.push(provider);
    }

    /// First provider that accepts `path`.
    pub fn provider_for(&self, path: &Path) -> Option<Arc<dyn RawSymbolProvider>> {
        self.providers
            .iter()
            .find(|p| p.supports_path(path))
            .cloned()
    }

    pub fn languages(&self) -> Vec<Language> {
        let mut languages: Vec<Language> = self.providers.iter().map(|p| p.language()).collect();
        languages.sort();
        languages.dedup();
        languages
    }

    pub fn provider_ids(&self) -> Vec<ProviderId> {
        self.providers.iter().map(|p| p.id()).collect()
    }
}
