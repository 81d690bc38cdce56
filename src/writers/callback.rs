// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::io;

use crate::traits::Writer;

type Callback = Box<dyn Fn(&str) + Send + Sync>;

/// Passes every message to a closure.
///
/// # Example
/// ```
/// use std::sync::{Arc, Mutex};
/// use teamcity_messages::traits::Writer;
/// use teamcity_messages::writers::CallbackWriter;
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let writer = CallbackWriter::new(move |message| sink.lock().unwrap().push(message.to_string()));
///
/// writer.write("hello").unwrap();
/// assert_eq!(*seen.lock().unwrap(), vec!["hello".to_string()]);
/// ```
pub struct CallbackWriter {
    callback: Callback,
}

impl CallbackWriter {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self {
            callback: Box::new(callback),
        }
    }
}

impl fmt::Debug for CallbackWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackWriter").finish_non_exhaustive()
    }
}

impl Writer for CallbackWriter {
    fn write(&self, message: &str) -> io::Result<()> {
        (self.callback)(message);
        Ok(())
    }
}
