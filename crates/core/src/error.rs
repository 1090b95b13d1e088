use symlens_api::SymbolError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SymlensError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Query(#[from] SymbolError),
}

pub type Result<T> = std::result::Result<T, SymlensError>;
