use crate::models::{Language, ProviderId};

/// Errors reported to callers of a symbol query.
#[derive(Debug, thiserror::Error)]
pub enum SymbolError {
    #[error("Unsupported language '{language}' for {path}")]
    UnsupportedLanguage { path: String, language: Language },
    #[error("Provider '{provider}' unavailable: {reason}")]
    ProviderUnavailable { provider: ProviderId, reason: String },
    #[error("Invalid symbol tree: {0}")]
    InvalidSymbolTree(String),
}

pub type SymbolResult<T> = std::result::Result<T, SymbolError>;

/// Failures a provider reports for a single request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("provider unreachable: {0}")]
    Unreachable(String),
    #[error("provider crashed: {0}")]
    Crashed(String),
    #[error("request timed out after {elapsed_ms} ms")]
    Timeout { elapsed_ms: u64 },
    #[error("request cancelled")]
    Cancelled,
    #[error("request failed: {0}")]
    Request(String),
    #[error("unsupported file: {0}")]
    UnsupportedFile(String),
}
