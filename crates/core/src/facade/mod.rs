use std::path::Path;
use std::sync::Arc;

use crate::classify::LowLevelClassifier;
use crate::config::{QueryConfig, SymlensConfig};
use crate::overview::{OverviewFlattener, OverviewPolicy};
use crate::profile::ProviderProfiles;
use crate::remap::KindRemapTable;
use crate::tree::SymbolTreeBuilder;
use symlens_api::{
    DocumentSymbols, Language, OverviewEntry, OverviewOptions, ProviderError, ProviderId,
    RawSymbolProvider, RawSymbolTree, SymbolError, SymbolResult,
};
use tokio_util::sync::CancellationToken;

mod query;
mod registry;

pub use registry::ProviderRegistry;

/// Entry point for symbol queries.
///
/// Holds only immutable policy (profiles, remap table, classifier) and the
/// provider registry; every query builds its result from scratch.
#[derive(Clone)]
pub struct SymbolQueryFacade {
    inner: Arc<FacadeInner>,
}

struct FacadeInner {
    registry: ProviderRegistry,
    profiles: ProviderProfiles,
    remap: KindRemapTable,
    classifier: LowLevelClassifier,
    query: QueryConfig,
}

impl SymbolQueryFacade {
    pub fn builder(config: SymlensConfig) -> SymbolQueryFacadeBuilder {
        SymbolQueryFacadeBuilder::new(config)
    }

    pub fn classifier(&self) -> &LowLevelClassifier {
        &self.inner.classifier
    }

    pub fn profiles(&self) -> &ProviderProfiles {
        &self.inner.profiles
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.inner.registry
    }

    pub fn overview_policy(&self, provider: &ProviderId) -> OverviewPolicy {
        self.inner.profiles.overview_policy(provider)
    }

    /// Resolve the provider, fetch its raw tree and normalize it.
    ///
    /// Returns the provider id alongside the symbols so overview policy can
    /// be selected without a second lookup.
    pub(crate) async fn document_symbols(
        &self,
        path: &Path,
    ) -> SymbolResult<(ProviderId, DocumentSymbols)> {
        let provider = self.inner.registry.provider_for(path).ok_or_else(|| {
            SymbolError::UnsupportedLanguage {
                path: path.display().to_string(),
                language: Language::from_path(path),
            }
        })?;
        let id = provider.id();

        let raw = self.fetch_raw(provider, path).await?;
        let symbols = SymbolTreeBuilder::new(&self.inner.remap)
            .with_max_depth(self.inner.query.max_tree_depth)
            .build(&raw, &id)?;

        tracing::debug!(
            "{} symbols ({} roots) from '{}' for {}",
            symbols.all_symbols.len(),
            symbols.root_symbols.len(),
            id,
            path.display()
        );
        Ok((id, symbols))
    }

    pub(crate) async fn document_overview(
        &self,
        path: &Path,
        options: OverviewOptions,
    ) -> SymbolResult<Vec<OverviewEntry>> {
        let (provider, symbols) = self.document_symbols(path).await?;
        let policy = self.overview_policy(&provider);
        let classifier = &self.inner.classifier;

        Ok(OverviewFlattener::flatten_where(
            &symbols.root_symbols,
            policy,
            options.depth,
            |node, depth| !(options.filter_low_level && classifier.is_low_level_at(node.kind, depth)),
        ))
    }

    /// Run the blocking provider call with the configured deadline.
    async fn fetch_raw(
        &self,
        provider: Arc<dyn RawSymbolProvider>,
        path: &Path,
    ) -> SymbolResult<RawSymbolTree> {
        let id = provider.id();
        let language = provider.language();
        let timeout = self.inner.query.provider_timeout();
        let cancel = CancellationToken::new();

        let task = tokio::task::spawn_blocking({
            let path = path.to_path_buf();
            let cancel = cancel.clone();
            move || provider.raw_symbols(&path, &cancel)
        });

        let result = match tokio::time::timeout(timeout, task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_err)) => Err(ProviderError::Crashed(join_err.to_string())),
            Err(_) => {
                cancel.cancel();
                Err(ProviderError::Timeout {
                    elapsed_ms: timeout.as_millis() as u64,
                })
            }
        };

        result.map_err(|err| {
            tracing::warn!("provider '{}' failed for {}: {}", id, path.display(), err);
            match err {
                ProviderError::UnsupportedFile(_) => SymbolError::UnsupportedLanguage {
                    path: path.display().to_string(),
                    language,
                },
                other => SymbolError::ProviderUnavailable {
                    provider: id,
                    reason: other.to_string(),
                },
            }
        })
    }
}

/// Assembles a facade from configuration and providers.
pub struct SymbolQueryFacadeBuilder {
    config: SymlensConfig,
    profiles: ProviderProfiles,
    registry: ProviderRegistry,
}

impl SymbolQueryFacadeBuilder {
    pub fn new(config: SymlensConfig) -> Self {
        Self {
            config,
            profiles: ProviderProfiles::builtin(),
            registry: ProviderRegistry::new(),
        }
    }

    /// Start from a custom profile set instead of the built-in one.
    pub fn profiles(mut self, profiles: ProviderProfiles) -> Self {
        self.profiles = profiles;
        self
    }

    pub fn register(mut self, provider: Arc<dyn RawSymbolProvider>) -> Self {
        self.registry.register(provider);
        self
    }

    pub fn build(self) -> SymbolQueryFacade {
        let SymlensConfig {
            query,
            classifier,
            providers,
            logging: _,
        } = self.config;

        let mut profiles = self.profiles;
        profiles.extend(providers);

        SymbolQueryFacade {
            inner: Arc::new(FacadeInner {
                remap: KindRemapTable::from_profiles(&profiles),
                classifier: LowLevelClassifier::new(&classifier),
                registry: self.registry,
                profiles,
                query,
            }),
        }
    }
}
