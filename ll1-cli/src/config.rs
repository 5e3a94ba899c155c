//! CLI 配置
//!
//! Resolution order: defaults, then the optional JSON config file, then
//! command line flags.

use std::path::{Path, PathBuf};

use ll1_config::{LogFormat, LogLevel, RunConfig};

use crate::error::CliError;

/// Values given on the command line, each one overriding the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub log_level: Option<LogLevel>,
    pub log_format: Option<LogFormat>,
    pub log_file: Option<PathBuf>,
}

impl Overrides {
    fn apply(self, config: &mut RunConfig) {
        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(level) = self.log_level {
            config.log.global = level;
        }
        if let Some(format) = self.log_format {
            config.format = format;
        }
        if let Some(file) = self.log_file {
            config.log.file = Some(file);
        }
    }
}

/// Read and parse a JSON config file
pub fn read_config_file(path: &Path) -> Result<RunConfig, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| CliError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Build the run configuration
pub fn resolve(config_file: Option<&Path>, overrides: Overrides) -> Result<RunConfig, CliError> {
    let mut config = match config_file {
        Some(path) => read_config_file(path)?,
        None => RunConfig::default(),
    };
    overrides.apply(&mut config);
    Ok(config)
}
