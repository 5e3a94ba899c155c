//! LL1 Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It is the shared configuration vocabulary between the scanning library
//! and the command line client.

use serde::Deserialize;
use std::path::PathBuf;

/// Verbosity of log output
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No log output at all
    Silent,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse a level name, case-insensitive. `off` is an alias of `silent`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "silent" | "off" => Some(LogLevel::Silent),
            "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Log output format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Colored, multi-line (development)
    Pretty,
    /// Single line, no timestamps
    #[default]
    Compact,
    /// Machine readable
    Json,
}

impl LogFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Some(LogFormat::Pretty),
            "compact" => Some(LogFormat::Compact),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// Component that emits log events, used for per-component filtering
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Component {
    Core,
    Cli,
}

impl Component {
    /// Get the string name of the component
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Core => "core",
            Component::Cli => "cli",
        }
    }

    /// Get the tracing target prefix for this component
    pub fn target(&self) -> &'static str {
        match self {
            Component::Core => "ll1_core",
            Component::Cli => "ll1_cli",
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub global: LogLevel,
    pub core: Option<LogLevel>,
    pub cli: Option<LogLevel>,
    /// Additional log file, appended to
    pub file: Option<PathBuf>,
}

impl LogConfig {
    /// Get log level for a specific component
    pub fn level_for(&self, component: Component) -> LogLevel {
        match component {
            Component::Core => self.core.unwrap_or(self.global),
            Component::Cli => self.cli.unwrap_or(self.global),
        }
    }
}

/// Configuration of one run of the example client
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Input file to scan
    pub input: PathBuf,
    pub log: LogConfig,
    pub format: LogFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("sequential_input.txt"),
            log: LogConfig::default(),
            format: LogFormat::default(),
        }
    }
}
