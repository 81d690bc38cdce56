// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration loading.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Configuration file loaded.
///
/// # Log Level
/// `debug!` - Startup detail
///
/// # Example
/// ```
/// use teamcity_messages::observability::messages::config::ConfigLoaded;
///
/// let msg = ConfigLoaded {
///     path: "teamcity-messages.yaml",
///     output: "stdout",
///     flow_id: None,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ConfigLoaded<'a> {
    pub path: &'a str,
    pub output: &'a str,
    pub flow_id: Option<&'a str>,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded config '{}': output={}, flow_id={}",
            self.path,
            self.output,
            self.flow_id.unwrap_or("none")
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::debug!(
            path = self.path,
            output = self.output,
            flow_id = self.flow_id,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "config_loaded",
            span_name = name,
            path = self.path,
            output = self.output,
        )
    }
}
