// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Service message line formatting.

use std::borrow::Cow;

use crate::errors::MessageResult;
use crate::protocol::escape::escape;
use crate::protocol::identifier::ensure_valid_identifier;

/// Prefix every service message starts with.
pub const MESSAGE_PREFIX: &str = "##teamcity[";

/// Line terminator appended to every formatted message.
#[cfg(windows)]
pub const LINE_TERMINATOR: &str = "\r\n";
/// Line terminator appended to every formatted message.
#[cfg(not(windows))]
pub const LINE_TERMINATOR: &str = "\n";

/// One parameter of a service message, either `key='value'` or a bare `'value'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter<'a> {
    pub key: Option<Cow<'a, str>>,
    pub value: Cow<'a, str>,
}

impl<'a> Parameter<'a> {
    /// Keyed parameter rendered as `key='value'`.
    pub fn named(key: impl Into<Cow<'a, str>>, value: impl Into<Cow<'a, str>>) -> Self {
        Self {
            key: Some(key.into()),
            value: value.into(),
        }
    }

    /// Positional parameter rendered as `'value'`.
    pub fn bare(value: impl Into<Cow<'a, str>>) -> Self {
        Self {
            key: None,
            value: value.into(),
        }
    }
}

impl<'a, K, V> From<(K, V)> for Parameter<'a>
where
    K: Into<Cow<'a, str>>,
    V: Into<Cow<'a, str>>,
{
    fn from((key, value): (K, V)) -> Self {
        Parameter::named(key, value)
    }
}

/// Formats one service message line.
///
/// The message name and every key are validated before anything is built, so
/// an invalid identifier never yields partial output. Parameters are rendered
/// in the given order and values are escaped. No parameter is dropped here.
///
/// # Example
/// ```
/// use teamcity_messages::protocol::{format, Parameter};
///
/// let line = format("start", &[Parameter::named("bar", "baz")]).unwrap();
/// assert_eq!(line.trim_end(), "##teamcity[start bar='baz']");
///
/// let line = format("buildNumber", &[Parameter::bare("1.2.3")]).unwrap();
/// assert_eq!(line.trim_end(), "##teamcity[buildNumber '1.2.3']");
/// ```
pub fn format(message_name: &str, parameters: &[Parameter<'_>]) -> MessageResult<String> {
    ensure_valid_identifier(message_name)?;
    for key in parameters.iter().filter_map(|p| p.key.as_deref()) {
        ensure_valid_identifier(key)?;
    }

    let mut line = String::with_capacity(MESSAGE_PREFIX.len() + message_name.len() + 2);
    line.push_str(MESSAGE_PREFIX);
    line.push_str(message_name);
    for parameter in parameters {
        line.push(' ');
        if let Some(key) = parameter.key.as_deref() {
            line.push_str(key);
            line.push('=');
        }
        line.push('\'');
        line.push_str(&escape(&parameter.value));
        line.push('\'');
    }
    line.push(']');
    line.push_str(LINE_TERMINATOR);

    Ok(line)
}
