pub mod error;
pub mod logging;

pub mod classify;
pub mod config;
pub mod facade;
pub mod lsp;
pub mod overview;
pub mod profile;
pub mod provider;
pub mod remap;
pub mod tree;

pub use classify::LowLevelClassifier;
pub use config::{ClassifierConfig, QueryConfig, SymlensConfig};
pub use error::{Result, SymlensError};
pub use logging::LoggingConfig;
pub use facade::{SymbolQueryFacade, SymbolQueryFacadeBuilder};
pub use overview::{OverviewFlattener, OverviewPolicy, summarize};
pub use profile::{KindOverride, ProviderProfile, ProviderProfiles};
pub use remap::KindRemapTable;
pub use tree::SymbolTreeBuilder;
