// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::{self, Write};
use std::sync::Mutex;

use crate::traits::Writer;

/// Writes messages to any byte stream.
///
/// The stream sits behind a mutex so one writer can be shared by loggers on
/// several threads. Every message is flushed after it is written.
///
/// # Example
/// ```
/// use teamcity_messages::traits::Writer;
/// use teamcity_messages::writers::StreamWriter;
///
/// let writer = StreamWriter::new(Vec::new());
/// writer.write("##teamcity[foo]\n").unwrap();
/// assert_eq!(writer.into_inner().unwrap(), b"##teamcity[foo]\n");
/// ```
#[derive(Debug)]
pub struct StreamWriter<W> {
    stream: Mutex<W>,
}

impl<W: Write + Send> StreamWriter<W> {
    pub fn new(stream: W) -> Self {
        Self {
            stream: Mutex::new(stream),
        }
    }

    /// Consumes the writer, returning the wrapped stream.
    pub fn into_inner(self) -> io::Result<W> {
        self.stream.into_inner().map_err(|_| poisoned())
    }
}

impl StreamWriter<io::Stderr> {
    /// Writer for the process' standard error stream.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> Writer for StreamWriter<W> {
    fn write(&self, message: &str) -> io::Result<()> {
        let mut stream = self.stream.lock().map_err(|_| poisoned())?;
        stream.write_all(message.as_bytes())?;
        stream.flush()
    }
}

fn poisoned() -> io::Error {
    io::Error::new(io::ErrorKind::Other, "stream writer lock poisoned")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writers::test_support::message_batches;

    struct BrokenStream;

    impl Write for BrokenStream {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_concatenates_messages() {
        for (name, messages) in message_batches() {
            let writer = StreamWriter::new(Vec::new());
            for message in &messages {
                writer.write(message).unwrap();
            }

            let written = String::from_utf8(writer.into_inner().unwrap()).unwrap();
            assert_eq!(written, messages.concat(), "batch: {}", name);
        }
    }

    #[test]
    fn test_stream_errors_propagate() {
        let writer = StreamWriter::new(BrokenStream);
        let err = writer.write("x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
