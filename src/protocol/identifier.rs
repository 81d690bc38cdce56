// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Identifier validation for message names, parameter keys and problem identities.

use regex::Regex;
use std::sync::LazyLock;

use crate::errors::{MessageError, MessageResult};

/// Leading ASCII letter followed by at least one letter, digit or `-`.
static IDENTIFIER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][-A-Za-z0-9]+$").expect("identifier pattern is valid"));

/// Returns `true` when `value` is accepted as a message name or parameter key.
///
/// # Example
/// ```
/// use teamcity_messages::protocol::is_valid_identifier;
///
/// assert!(is_valid_identifier("compilerName"));
/// assert!(is_valid_identifier("build-problem-1"));
/// assert!(!is_valid_identifier("x"));
/// assert!(!is_valid_identifier("1st"));
/// ```
pub fn is_valid_identifier(value: &str) -> bool {
    IDENTIFIER_PATTERN.is_match(value)
}

/// Fails with [`MessageError::InvalidIdentifier`] when `value` is not a valid identifier.
pub fn ensure_valid_identifier(value: &str) -> MessageResult<()> {
    if is_valid_identifier(value) {
        Ok(())
    } else {
        Err(MessageError::InvalidIdentifier(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        for value in ["foo", "ab", "A1", "flowId", "error-details", "x-", "Z9-9"] {
            assert!(is_valid_identifier(value), "expected '{}' to be valid", value);
        }
    }

    #[test]
    fn test_invalid_identifiers() {
        let cases = [
            ("", "empty string"),
            (" ", "space"),
            ("č", "non-ascii letter"),
            ("a", "single character"),
            ("1abc", "leading digit"),
            ("-abc", "leading hyphen"),
            ("ab c", "inner space"),
            ("ab_c", "underscore"),
            ("abč", "trailing non-ascii"),
            ("ab\n", "trailing newline"),
        ];

        for (value, name) in cases {
            assert!(!is_valid_identifier(value), "{}: expected invalid", name);
            match ensure_valid_identifier(value) {
                Err(MessageError::InvalidIdentifier(rejected)) => assert_eq!(rejected, value),
                other => panic!("{}: unexpected result {:?}", name, other),
            }
        }
    }
}
