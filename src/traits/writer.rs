// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io;

/// Destination for formatted service messages.
///
/// Implementations must not post-process the message and must accept any
/// contents. A full message ends with the platform line terminator; several
/// writes concatenated together form the output stream.
///
/// Writers are shared between every logger derived from the same root, so
/// they take `&self` and handle their own interior mutability. Nothing here
/// orders writes coming from different threads.
pub trait Writer: Send + Sync {
    fn write(&self, message: &str) -> io::Result<()>;
}
