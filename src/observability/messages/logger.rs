// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for service message emission.
//!
//! This module contains message types for logging events related to:
//! * Service messages handed to a writer
//! * Service messages refused before formatting
//! * Scoped blocks entered
//! * Scoped blocks closed while a panic unwinds

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A service message was formatted and handed to the writer.
///
/// # Log Level
/// `trace!` - High volume, one per emitted line
///
/// # Example
/// ```
/// use teamcity_messages::observability::messages::logger::MessageEmitted;
///
/// let msg = MessageEmitted {
///     message_name: "testStarted",
///     parameter_count: 3,
///     flow_id: Some("worker-1"),
/// };
///
/// tracing::trace!("{}", msg);
/// ```
pub struct MessageEmitted<'a> {
    pub message_name: &'a str,
    pub parameter_count: usize,
    pub flow_id: Option<&'a str>,
}

impl Display for MessageEmitted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Emitted service message '{}' with {} parameters",
            self.message_name, self.parameter_count
        )?;
        if let Some(flow_id) = self.flow_id {
            write!(f, " in flow '{}'", flow_id)?;
        }
        Ok(())
    }
}

impl StructuredLog for MessageEmitted<'_> {
    fn log(&self) {
        tracing::trace!(
            message_name = self.message_name,
            parameter_count = self.parameter_count,
            flow_id = self.flow_id,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "message_emitted",
            span_name = name,
            message_name = self.message_name,
            parameter_count = self.parameter_count,
            flow_id = self.flow_id,
        )
    }
}

/// A service message was refused before anything reached the writer.
///
/// # Log Level
/// `warn!` - Caller bug, surfaced as an error as well
///
/// # Example
/// ```
/// use teamcity_messages::observability::messages::logger::MessageRejected;
///
/// let msg = MessageRejected {
///     message_name: "buildProblem",
///     reason: "Value 'not valid' is not a valid identifier",
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct MessageRejected<'a> {
    pub message_name: &'a str,
    pub reason: &'a str,
}

impl Display for MessageRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Rejected service message '{}': {}",
            self.message_name, self.reason
        )
    }
}

impl StructuredLog for MessageRejected<'_> {
    fn log(&self) {
        tracing::warn!(
            message_name = self.message_name,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "message_rejected",
            span_name = name,
            message_name = self.message_name,
            reason = self.reason,
        )
    }
}

/// A scoped helper wrote its start message and is about to run the body.
///
/// # Log Level
/// `debug!` - One per scope, useful when following nested blocks
///
/// # Example
/// ```
/// use teamcity_messages::observability::messages::logger::ScopeEntered;
///
/// let msg = ScopeEntered {
///     scope: "block",
///     name: "Tests",
///     flow_id: None,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ScopeEntered<'a> {
    pub scope: &'a str,
    pub name: &'a str,
    pub flow_id: Option<&'a str>,
}

impl Display for ScopeEntered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Entered {} '{}'", self.scope, self.name)?;
        if let Some(flow_id) = self.flow_id {
            write!(f, " in flow '{}'", flow_id)?;
        }
        Ok(())
    }
}

impl StructuredLog for ScopeEntered<'_> {
    fn log(&self) {
        tracing::debug!(
            scope = self.scope,
            name = self.name,
            flow_id = self.flow_id,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "scope",
            span_name = name,
            scope = self.scope,
            name = self.name,
            flow_id = self.flow_id,
        )
    }
}

/// A scoped block was closed because its body panicked.
///
/// # Log Level
/// `warn!` - The build log is consistent but the caller is going down
///
/// # Example
/// ```
/// use teamcity_messages::observability::messages::logger::ScopeClosedDuringUnwind;
///
/// let msg = ScopeClosedDuringUnwind {
///     scope: "block",
///     name: "Tests",
///     close_error: None,
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct ScopeClosedDuringUnwind<'a> {
    pub scope: &'a str,
    pub name: &'a str,
    pub close_error: Option<&'a dyn std::error::Error>,
}

impl Display for ScopeClosedDuringUnwind<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.close_error {
            None => write!(f, "Closed {} '{}' while unwinding from a panic", self.scope, self.name),
            Some(error) => write!(
                f,
                "Failed to close {} '{}' while unwinding from a panic: {}",
                self.scope, self.name, error
            ),
        }
    }
}

impl StructuredLog for ScopeClosedDuringUnwind<'_> {
    fn log(&self) {
        tracing::warn!(
            scope = self.scope,
            name = self.name,
            close_failed = self.close_error.is_some(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "scope_unwound",
            span_name = name,
            scope = self.scope,
            name = self.name,
            close_failed = self.close_error.is_some(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_message_emitted_display() {
        let without_flow = MessageEmitted {
            message_name: "message",
            parameter_count: 3,
            flow_id: None,
        };
        assert_eq!(
            without_flow.to_string(),
            "Emitted service message 'message' with 3 parameters"
        );

        let with_flow = MessageEmitted {
            flow_id: Some("1234"),
            ..without_flow
        };
        assert_eq!(
            with_flow.to_string(),
            "Emitted service message 'message' with 3 parameters in flow '1234'"
        );
    }

    #[test]
    fn test_scope_entered_display() {
        let msg = ScopeEntered {
            scope: "progress",
            name: "Indexing",
            flow_id: None,
        };
        assert_eq!(msg.to_string(), "Entered progress 'Indexing'");

        let in_flow = ScopeEntered {
            flow_id: Some("worker-1"),
            ..msg
        };
        assert_eq!(in_flow.to_string(), "Entered progress 'Indexing' in flow 'worker-1'");
    }

    #[test]
    fn test_scope_closed_during_unwind_display() {
        let error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let msg = ScopeClosedDuringUnwind {
            scope: "compilation",
            name: "gcc",
            close_error: Some(&error),
        };
        assert_eq!(
            msg.to_string(),
            "Failed to close compilation 'gcc' while unwinding from a panic: pipe closed"
        );
    }
}
