// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;        // binary wiring
pub mod errors;        // error handling
pub mod logger;        // typed build event operations
pub mod observability;
pub mod protocol;      // service message formatting
pub mod traits;        // writer abstraction
pub mod writers;       // writer implementations
