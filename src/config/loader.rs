// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::errors::ConfigError;
use crate::logger::MessageLogger;
use crate::observability::messages::config::ConfigLoaded;
use crate::observability::messages::StructuredLog;
use crate::traits::Writer;
use crate::writers::{StdoutWriter, StreamWriter};

/// Logger wiring loaded from YAML.
///
/// Every field is optional; an empty document yields the defaults.
///
/// # Fields
/// * `flow_id` - Flow id attached to every message (optional)
/// * `output` - Stream the messages are written to (defaults to stdout)
///
/// # Example
/// ```yaml
/// flow_id: "nightly-1"
/// output: stderr
/// ```
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub flow_id: Option<String>,
    #[serde(default)]
    pub output: Output,
}

/// Stream service messages are written to.
#[derive(Debug, Default, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Output {
    #[default]
    Stdout,
    Stderr,
}

impl Output {
    pub fn as_str(&self) -> &'static str {
        match self {
            Output::Stdout => "stdout",
            Output::Stderr => "stderr",
        }
    }
}

impl Config {
    /// Creates a logger writing to the configured stream.
    pub fn build_logger(&self) -> MessageLogger {
        let writer: Arc<dyn Writer> = match self.output {
            Output::Stdout => Arc::new(StdoutWriter::new()),
            Output::Stderr => Arc::new(StreamWriter::stderr()),
        };
        MessageLogger::new(writer, self.flow_id.clone())
    }
}

/// Loads a configuration file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: Config = if content.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?
    };

    ConfigLoaded {
        path: &path.display().to_string(),
        output: cfg.output.as_str(),
        flow_id: cfg.flow_id.as_deref(),
    }
    .log();

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
flow_id: "nightly-1"
output: stderr
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.flow_id.as_deref(), Some("nightly-1"));
        assert_eq!(cfg.output, Output::Stderr);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let cfg: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.output, Output::Stdout);
        assert!(cfg.flow_id.is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let file = write_config("flow_id: build-7\n");

        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.flow_id.as_deref(), Some("build-7"));

        let logger = cfg.build_logger();
        assert_eq!(logger.flow_id(), Some("build-7"));
    }

    #[test]
    fn test_load_empty_config_file() {
        let file = write_config("");
        assert_eq!(load_config(file.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_load_config_rejects_unknown_output() {
        let file = write_config("output: printer\n");

        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
        let error_msg = result.unwrap_err().to_string();
        assert!(error_msg.contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.yaml");

        let result = load_config(&missing);
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
