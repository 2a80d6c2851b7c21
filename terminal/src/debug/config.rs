//! Debug configuration from environment variables

use std::path::PathBuf;

const DEFAULT_FILTER: &str = "terminal=info,warn";
const DEBUG_FILTER: &str = "terminal=debug,lib_evm=debug,info";

/// Debug system configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Log file name prefix inside `log_dir`
    pub log_file_name: String,
    /// Log level filter (e.g., "terminal=debug,info")
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_file_name: "terminal-debug.log".to_string(),
            log_level: default_filter().to_string(),
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("TERMINAL_LOG_DIR").ok(),
            std::env::var("RUST_LOG").ok(),
        )
    }

    fn from_vars(log_dir: Option<String>, log_level: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_dir: log_dir
                .filter(|d| !d.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: log_level
                .filter(|l| !l.trim().is_empty())
                .unwrap_or(defaults.log_level),
            ..defaults
        }
    }

    /// Full path of today's log file prefix
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(&self.log_file_name)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

fn default_filter() -> &'static str {
    if cfg!(feature = "debug-mode") {
        DEBUG_FILTER
    } else {
        DEFAULT_FILTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DebugConfig::from_vars(None, None);
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert_eq!(config.log_file(), PathBuf::from("logs/terminal-debug.log"));
        assert_eq!(config.log_level, default_filter());
    }

    #[test]
    fn test_overrides() {
        let config = DebugConfig::from_vars(
            Some("/tmp/xtime".to_string()),
            Some("terminal=trace".to_string()),
        );
        assert_eq!(config.log_dir, PathBuf::from("/tmp/xtime"));
        assert!(config.is_debug_enabled());
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = DebugConfig::from_vars(Some("  ".to_string()), Some(String::new()));
        assert_eq!(config, DebugConfig::default());
    }
}
