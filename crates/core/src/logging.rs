use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable overriding the configured log filter.
pub const LOG_ENV: &str = "SYMLENS_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `symlens_core=debug`.
    pub level: String,
    /// Write daily-rolling log files.
    pub file: bool,
    /// Log directory, `~/.symlens/logs` when unset.
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: true,
            dir: None,
        }
    }
}

impl LoggingConfig {
    pub fn log_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(default_log_dir)
    }

    /// `$SYMLENS_LOG` wins over the configured level; an unparsable level
    /// falls back to `info`.
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_new(&self.level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

pub fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".symlens/logs")
}

/// Install the global subscriber for `component`.
///
/// Returns the file appender guard when file logging is active. A log
/// directory that cannot be created degrades to stderr-only logging. A
/// subscriber installed earlier is left in place.
pub fn init_logging(component: &str, config: &LoggingConfig, to_stderr: bool) -> Option<WorkerGuard> {
    let log_dir = config.log_dir();
    let dir_error = if config.file {
        std::fs::create_dir_all(&log_dir).err()
    } else {
        None
    };
    let to_stderr = to_stderr || dir_error.is_some();

    let (file_layer, guard) = if config.file && dir_error.is_none() {
        // e.g. cli.log.2026-10-19
        let appender = tracing_appender::rolling::daily(&log_dir, component);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    let stderr_layer = to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false)
    });

    let installed = tracing_subscriber::registry()
        .with(config.filter())
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .is_ok();

    if let Some(err) = dir_error {
        tracing::warn!("cannot create log dir {}: {}", log_dir.display(), err);
    }
    if !installed {
        tracing::debug!("subscriber already installed, keeping it for '{}'", component);
    }
    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_log_to_home_directory() {
        let config = LoggingConfig::default();
        assert!(config.file);
        assert_eq!(config.log_dir(), default_log_dir());
        assert!(config.log_dir().ends_with(".symlens/logs"));
    }

    #[test]
    fn configured_directory_wins() {
        let config = LoggingConfig {
            dir: Some(PathBuf::from("/var/log/symlens")),
            ..LoggingConfig::default()
        };
        assert_eq!(config.log_dir(), PathBuf::from("/var/log/symlens"));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: LoggingConfig = serde_json::from_str(r#"{ "file": false }"#).unwrap();
        assert!(!config.file);
        assert_eq!(config.level, "info");
    }

    #[test]
    fn file_logging_writes_under_configured_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            dir: Some(dir.path().join("logs")),
            ..LoggingConfig::default()
        };
        let guard = init_logging("test", &config, false);
        assert!(guard.is_some());
        assert!(dir.path().join("logs").is_dir());
    }

    #[test]
    fn disabled_file_logging_returns_no_guard() {
        let config = LoggingConfig {
            file: false,
            ..LoggingConfig::default()
        };
        assert!(init_logging("test", &config, false).is_none());
    }
}
