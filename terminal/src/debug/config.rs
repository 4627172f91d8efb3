//! Logging configuration from environment variables

use std::path::PathBuf;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "ascend_terminal=info,warn";

/// Rotated main log file name
pub const LOG_FILE_NAME: &str = "ascend-terminal.log";

/// Truncated-per-session realtime log file name
pub const REALTIME_LOG_FILE_NAME: &str = "ascend-realtime.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DebugConfig {
    /// Log level filter (e.g., "ascend_terminal=debug,info")
    pub log_level: String,
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Enable realtime debug log (separate from main log)
    pub enable_realtime_log: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: PathBuf::from("logs"),
            enable_realtime_log: false,
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    ///
    /// - `RUST_LOG`: filter directives
    /// - `ASCEND_LOG_DIR`: log directory (default `logs`)
    /// - `ASCEND_DEBUG_REALTIME`: `1` enables the realtime log
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_dir: lookup("ASCEND_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            enable_realtime_log: lookup("ASCEND_DEBUG_REALTIME")
                .map(|v| v == "1")
                .unwrap_or(defaults.enable_realtime_log),
        }
    }

    /// Main log file path (before the date suffix the appender adds)
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    pub fn realtime_log_file(&self) -> PathBuf {
        self.log_dir.join(REALTIME_LOG_FILE_NAME)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        let config = DebugConfig::from_lookup(|_| None);
        assert_eq!(config, DebugConfig::default());
        assert_eq!(config.log_file(), PathBuf::from("logs").join("ascend-terminal.log"));
        assert!(!config.is_debug_enabled());
    }

    #[test]
    fn test_env_values_are_applied() {
        let config = DebugConfig::from_lookup(|key| match key {
            "RUST_LOG" => Some("ascend_terminal=debug".to_string()),
            "ASCEND_LOG_DIR" => Some("/tmp/ascend-logs".to_string()),
            "ASCEND_DEBUG_REALTIME" => Some("1".to_string()),
            _ => None,
        });
        assert!(config.is_debug_enabled());
        assert!(config.enable_realtime_log);
        assert_eq!(
            config.realtime_log_file(),
            PathBuf::from("/tmp/ascend-logs").join("ascend-realtime.log")
        );
    }
}
