// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for the crate's own structured diagnostics.
//!
//! Service messages are the product of this crate and go to a
//! [`Writer`](crate::traits::Writer). Diagnostics about producing them go to
//! `tracing` instead, so they never mix with the protocol stream. Message
//! types follow a struct-based pattern with a `Display` implementation:
//!
//! * No magic strings scattered through the logger
//! * One place to look for everything the crate can report
//! * Consistent structured fields for each event
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::logger` - service message emission and scoped blocks
//! * `messages::config` - configuration loading
//!
//! # Usage
//!
//! ```rust
//! use teamcity_messages::observability::messages::logger::MessageRejected;
//! use teamcity_messages::observability::messages::StructuredLog;
//!
//! MessageRejected {
//!     message_name: "buildStatus",
//!     reason: "either status or text must be given",
//! }
//! .log();
//! ```

pub mod messages;
