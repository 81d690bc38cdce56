// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! TeamCity service message protocol.
//!
//! Turns a message name and an ordered list of parameters into one line of
//! wire text:
//!
//! ```text
//! ##teamcity[<name> <key>='<escaped>' '<escaped>' ...]
//! ```
//!
//! Formatting is pure. Names and keys are validated up front and values are
//! escaped; dropping unset parameters is left to the caller.

mod escape;
mod format;
mod identifier;
mod timestamp;

pub use escape::escape;
pub use format::{format, Parameter, LINE_TERMINATOR, MESSAGE_PREFIX};
pub use identifier::{ensure_valid_identifier, is_valid_identifier};
pub use timestamp::{format_timestamp, now, TIMESTAMP_FORMAT};
