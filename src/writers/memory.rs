// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io;
use std::sync::Mutex;

use crate::traits::Writer;

/// Buffers every message in memory.
#[derive(Debug, Default)]
pub struct MemoryWriter {
    buffer: Mutex<String>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        self.buffer
            .lock()
            .map(|buffer| buffer.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Returns everything written so far and clears the buffer.
    pub fn take(&self) -> String {
        let mut buffer = self
            .buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::take(&mut *buffer)
    }
}

impl Writer for MemoryWriter {
    fn write(&self, message: &str) -> io::Result<()> {
        let mut buffer = self
            .buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        buffer.push_str(message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writers::test_support::message_batches;

    #[test]
    fn test_write_buffers_messages() {
        for (name, messages) in message_batches() {
            let writer = MemoryWriter::new();
            for message in &messages {
                writer.write(message).unwrap();
            }
            assert_eq!(writer.contents(), messages.concat(), "batch: {}", name);
        }
    }

    #[test]
    fn test_take_clears_buffer() {
        let writer = MemoryWriter::new();
        writer.write("first\n").unwrap();

        assert_eq!(writer.take(), "first\n");
        assert_eq!(writer.contents(), "");

        writer.write("second\n").unwrap();
        assert_eq!(writer.contents(), "second\n");
    }
}
