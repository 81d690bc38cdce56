// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while building or emitting service messages.

use thiserror::Error;

/// Error type for every formatting and logging operation.
///
/// `InvalidIdentifier` and `InvalidArgument` are always raised before anything
/// reaches the writer. Writer failures are passed through untouched.
#[derive(Error, Debug)]
pub enum MessageError {
    /// A message name, parameter key or build problem identity is not a valid identifier.
    #[error("Value '{0}' is not a valid identifier")]
    InvalidIdentifier(String),

    /// An operation was called with arguments it cannot accept.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The writer failed to accept the formatted message.
    #[error(transparent)]
    Write(#[from] std::io::Error),
}

/// Convenience type for functions returning `Result<T, MessageError>`.
pub type MessageResult<T> = Result<T, MessageError>;
