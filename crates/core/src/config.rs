use crate::error::{Result, SymlensError};
use crate::logging::LoggingConfig;
use crate::profile::ProviderProfile;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use symlens_api::CanonicalKind;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "SYMLENS_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymlensConfig {
    pub query: QueryConfig,
    pub classifier: ClassifierConfig,
    pub logging: LoggingConfig,
    /// Provider profiles layered over the built-in ones.
    pub providers: Vec<ProviderProfile>,
}

impl SymlensConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `explicit`, else from `$SYMLENS_CONFIG`, else defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
        match path {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.query.provider_timeout_ms == 0 {
            return Err(SymlensError::Config(
                "query.provider_timeout_ms must be greater than zero".to_string(),
            ));
        }
        if self.query.max_tree_depth == 0 {
            return Err(SymlensError::Config(
                "query.max_tree_depth must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub provider_timeout_ms: u64,
    pub max_tree_depth: usize,
}

impl QueryConfig {
    pub fn provider_timeout(&self) -> Duration {
        Duration::from_millis(self.provider_timeout_ms)
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            provider_timeout_ms: 10_000,
            max_tree_depth: 256,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub low_level: Vec<CanonicalKind>,
    pub module_scope_constants_high_level: bool,
}

impl ClassifierConfig {
    pub const DEFAULT_LOW_LEVEL: [CanonicalKind; 12] = [
        CanonicalKind::Variable,
        CanonicalKind::Constant,
        CanonicalKind::String,
        CanonicalKind::Number,
        CanonicalKind::Boolean,
        CanonicalKind::Array,
        CanonicalKind::Key,
        CanonicalKind::Null,
        CanonicalKind::EnumMember,
        CanonicalKind::Event,
        CanonicalKind::Operator,
        CanonicalKind::TypeParameter,
    ];
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            low_level: Self::DEFAULT_LOW_LEVEL.to_vec(),
            module_scope_constants_high_level: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overview::OverviewPolicy;
    use std::io::Write;

    #[test]
    fn empty_object_yields_defaults() {
        let config: SymlensConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SymlensConfig::default());
        assert_eq!(config.query.provider_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn load_reads_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "query": {{ "provider_timeout_ms": 250 }},
                "providers": [{{ "provider": "vendor-ls", "overview": "flatten_all" }}]
            }}"#
        )
        .unwrap();

        let config = SymlensConfig::load(file.path()).unwrap();
        assert_eq!(config.query.provider_timeout_ms, 250);
        assert_eq!(config.query.max_tree_depth, 256);
        assert_eq!(config.providers.len(), 1);
        assert_eq!(config.providers[0].overview, OverviewPolicy::FlattenAll);
    }

    #[test]
    fn logging_section_is_read() {
        let config: SymlensConfig = serde_json::from_str(
            r#"{ "logging": { "level": "symlens_core=debug", "dir": "/tmp/symlens-logs" } }"#,
        )
        .unwrap();
        assert_eq!(config.logging.level, "symlens_core=debug");
        assert!(config.logging.file);
        assert_eq!(config.logging.log_dir(), PathBuf::from("/tmp/symlens-logs"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "query": {{ "provider_timeout_ms": 0 }} }}"#).unwrap();
        let err = SymlensConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, SymlensError::Config(_)));
    }

    #[test]
    fn malformed_json_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = SymlensConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, SymlensError::Json(_)));
    }
}
