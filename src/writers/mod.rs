// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Reference [`Writer`](crate::traits::Writer) implementations.
//!
//! * `stdout` - standard output, flushed per message
//! * `stream` - any `std::io::Write` behind a mutex (stderr, files, pipes)
//! * `callback` - hands the raw text to a closure
//! * `memory` - collects everything into a string

pub mod callback;
pub mod memory;
pub mod stdout;
pub mod stream;

pub use callback::CallbackWriter;
pub use memory::MemoryWriter;
pub use stdout::StdoutWriter;
pub use stream::StreamWriter;
