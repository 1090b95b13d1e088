pub mod error;
pub mod models;
pub mod provider;
pub mod query;

// Re-export commonly used types
pub use error::{ProviderError, SymbolError, SymbolResult};
pub use models::*;
pub use provider::RawSymbolProvider;
pub use query::{OverviewOptions, SymbolQueryService};
