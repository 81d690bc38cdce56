// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Typed build event logger.
//!
//! [`MessageLogger`] offers one method per build event kind. Every method
//! builds its parameters, prefixes them with `timestamp` and, when the logger
//! carries one, `flowId`, drops the parameters that were not given, formats
//! the line and hands it to the shared [`Writer`].
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use teamcity_messages::logger::MessageLogger;
//! use teamcity_messages::writers::MemoryWriter;
//!
//! let writer = Arc::new(MemoryWriter::new());
//! let logger = MessageLogger::new(writer.clone(), None);
//!
//! logger.block("Tests", "", |logger| logger.message("running"))?;
//!
//! assert_eq!(writer.contents().lines().count(), 3);
//! # Ok::<(), teamcity_messages::errors::MessageError>(())
//! ```
//!
//! # Threads
//!
//! A logger is `Send + Sync` and cheap to clone. Each call performs exactly one
//! write, but lines from different threads sharing a writer arrive in whatever
//! order the writer receives them. Serialize externally when the relative
//! order matters.

mod import;
mod operations;
mod scoped;
mod types;


pub use import::{CoverageTool, ImportDataOptions, ImportType, NoDataPublishedAction};
pub use types::{BuildStatus, MessageStatus, StatisticValue};

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::errors::{MessageError, MessageResult};
use crate::observability::messages::logger::{MessageEmitted, MessageRejected};
use crate::observability::messages::StructuredLog;
use crate::protocol::{self, Parameter};
use crate::traits::Writer;

/// Emits TeamCity service messages through a shared writer.
///
/// A logger is an immutable pair of writer and flow id. [`derive`](Self::derive)
/// creates a sibling for another flow that writes to the same writer.
#[derive(Clone)]
pub struct MessageLogger {
    writer: Arc<dyn Writer>,
    flow_id: Option<String>,
}

/// A parameter before unset values are dropped.
pub(crate) struct Entry<'a> {
    key: Option<&'a str>,
    value: Option<Cow<'a, str>>,
}

impl<'a> Entry<'a> {
    pub(crate) fn named<V>(key: &'a str, value: Option<V>) -> Self
    where
        V: Into<Cow<'a, str>>,
    {
        Self {
            key: Some(key),
            value: value.map(Into::into),
        }
    }

    pub(crate) fn bare<V>(value: V) -> Self
    where
        V: Into<Cow<'a, str>>,
    {
        Self {
            key: None,
            value: Some(value.into()),
        }
    }
}

impl MessageLogger {
    /// Creates a logger writing to `writer`, tagging every message with `flow_id` when given.
    pub fn new(writer: Arc<dyn Writer>, flow_id: Option<String>) -> Self {
        Self { writer, flow_id }
    }

    /// Creates a logger for another flow that shares this logger's writer.
    pub fn derive(&self, flow_id: Option<String>) -> Self {
        Self {
            writer: Arc::clone(&self.writer),
            flow_id,
        }
    }

    pub fn writer(&self) -> &Arc<dyn Writer> {
        &self.writer
    }

    pub fn flow_id(&self) -> Option<&str> {
        self.flow_id.as_deref()
    }

    /// Emits an arbitrary service message.
    ///
    /// Parameters whose value is `None` are left out, empty strings are kept.
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use teamcity_messages::logger::MessageLogger;
    /// use teamcity_messages::writers::MemoryWriter;
    ///
    /// let writer = Arc::new(MemoryWriter::new());
    /// let logger = MessageLogger::new(writer.clone(), None);
    /// logger
    ///     .write_message("testMetadata", [("name", Some("coverage")), ("type", None)])
    ///     .unwrap();
    ///
    /// assert!(writer.contents().contains(" name='coverage']"));
    /// ```
    pub fn write_message<'a, I>(&self, message_name: &str, parameters: I) -> MessageResult<()>
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let entries = parameters
            .into_iter()
            .map(|(key, value)| Entry::named(key, value))
            .collect();
        self.emit(message_name, entries)
    }

    /// Emits a message carrying a single unnamed value, as `buildNumber` does.
    pub fn write_value(&self, message_name: &str, value: &str) -> MessageResult<()> {
        self.emit(message_name, vec![Entry::bare(value)])
    }

    /// Formats `entries` behind the timestamp and flow id and writes the line.
    pub(crate) fn emit(&self, message_name: &str, entries: Vec<Entry<'_>>) -> MessageResult<()> {
        let timestamp = protocol::now();
        let mut parameters = Vec::with_capacity(entries.len() + 2);
        parameters.push(Parameter::named("timestamp", timestamp.as_str()));
        if let Some(flow_id) = self.flow_id.as_deref() {
            parameters.push(Parameter::named("flowId", flow_id));
        }
        parameters.extend(entries.into_iter().filter_map(|entry| {
            entry.value.map(|value| Parameter {
                key: entry.key.map(Cow::Borrowed),
                value,
            })
        }));

        let line = protocol::format(message_name, &parameters)
            .map_err(|err| self.reject(message_name, err))?;
        self.writer.write(&line)?;

        MessageEmitted {
            message_name,
            parameter_count: parameters.len(),
            flow_id: self.flow_id(),
        }
        .log();
        Ok(())
    }

    /// Records a refused message and hands the error back.
    pub(crate) fn reject(&self, message_name: &str, err: MessageError) -> MessageError {
        MessageRejected {
            message_name,
            reason: &err.to_string(),
        }
        .log();
        err
    }
}

impl fmt::Debug for MessageLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageLogger")
            .field("flow_id", &self.flow_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use regex::Regex;
    use std::sync::{Arc, LazyLock};

    use super::MessageLogger;
    use crate::protocol::LINE_TERMINATOR;
    use crate::writers::MemoryWriter;

    static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"timestamp='[^']+'").unwrap());

    pub fn memory_logger(flow_id: Option<&str>) -> (Arc<MemoryWriter>, MessageLogger) {
        let writer = Arc::new(MemoryWriter::new());
        let logger = MessageLogger::new(writer.clone(), flow_id.map(str::to_string));
        (writer, logger)
    }

    /// Output with every timestamp replaced by `*`.
    pub fn normalized(writer: &MemoryWriter) -> String {
        TIMESTAMP
            .replace_all(&writer.take(), "timestamp='*'")
            .into_owned()
    }

    /// Joins expected lines, terminating each one.
    pub fn lines(expected: &[&str]) -> String {
        expected
            .iter()
            .map(|line| format!("{}{}", line, LINE_TERMINATOR))
            .collect()
    }
}
