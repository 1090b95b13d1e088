use crate::error::ProviderError;
use crate::models::{Language, ProviderId, RawSymbolTree};
use std::path::Path;
use tokio_util::sync::CancellationToken;

/// An external symbol provider for one source language.
///
/// Every provider is reached through this interface; its quirks are described
/// by data keyed on [`RawSymbolProvider::id`], never by the caller branching on it.
pub trait RawSymbolProvider: Send + Sync {
    /// Identity token used to select remap rows and overview policy.
    fn id(&self) -> ProviderId;

    /// Language served by this provider.
    fn language(&self) -> Language;

    /// Whether this provider answers for the given file.
    fn supports_path(&self, path: &Path) -> bool;

    /// Fetch the provider-native symbol tree for `path`.
    ///
    /// Blocking. Implementations should poll `cancel` and return
    /// [`ProviderError::Cancelled`] once it fires.
    fn raw_symbols(
        &self,
        path: &Path,
        cancel: &CancellationToken,
    ) -> Result<RawSymbolTree, ProviderError>;
}
