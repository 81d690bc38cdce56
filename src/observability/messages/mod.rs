// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit it at its level with its fields attached.
//!
//! * `logger` - service message emission, rejection and scope unwinding
//! * `config` - configuration file loading

use tracing::Span;

pub mod config;
pub mod logger;

/// A diagnostic event that knows its own level and structured fields.
pub trait StructuredLog: std::fmt::Display {
    /// Emits the event at its level.
    fn log(&self);

    /// Span carrying the same fields, for work done on behalf of this event.
    fn span(&self, name: &str) -> Span;
}
