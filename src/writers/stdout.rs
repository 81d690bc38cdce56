// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::{self, Write};

use crate::traits::Writer;

/// Writes messages to standard output.
///
/// Each message is written under the stdout lock and flushed, so a single
/// message never interleaves with other output from this process.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutWriter;

impl StdoutWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Writer for StdoutWriter {
    fn write(&self, message: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(message.as_bytes())?;
        out.flush()
    }
}
