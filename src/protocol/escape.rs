// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Value escaping for service message parameters.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Matches one special character, or a literal `\uDDDD` escape sequence.
static ESCAPE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(['\n\r|\[\]])|\\u([0-9]{4})").expect("escape pattern is valid")
});

/// Escapes a parameter value so it can be placed between single quotes.
///
/// | input       | output     |
/// |-------------|------------|
/// | `'`         | `\|'`      |
/// | newline     | `\|n`      |
/// | carriage ret| `\|r`      |
/// | `\|`        | `\|\|`     |
/// | `[` / `]`   | `\|[` / `\|]` |
/// | `\uDDDD`    | `\|0xDDDD` |
///
/// Everything else, including non-ASCII text, passes through untouched. When
/// nothing needs escaping the input is returned borrowed.
///
/// # Example
/// ```
/// use teamcity_messages::protocol::escape;
///
/// assert_eq!(escape("it's [done]"), "it|'s |[done|]");
/// assert_eq!(escape(r"\u0123"), "|0x0123");
/// assert_eq!(escape("žluťoučký"), "žluťoučký");
/// ```
pub fn escape(value: &str) -> Cow<'_, str> {
    ESCAPE_PATTERN.replace_all(value, |caps: &Captures| {
        if let Some(special) = caps.get(1) {
            escape_special(special.as_str()).to_string()
        } else {
            format!("|0x{}", &caps[2])
        }
    })
}

fn escape_special(special: &str) -> &str {
    match special {
        "'" => "|'",
        "\n" => "|n",
        "\r" => "|r",
        "|" => "||",
        "[" => "|[",
        "]" => "|]",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_table() {
        let cases = [
            (" ' ", " |' "),
            (" \n ", " |n "),
            (" \r ", " |r "),
            (" | ", " || "),
            (" [ ] ", " |[ |] "),
            (r" \u0123 ", " |0x0123 "),
            ("\r\n", "|r|n"),
            ("||", "||||"),
        ];

        for (input, expected) in cases {
            assert_eq!(escape(input), expected, "escaping {:?}", input);
        }
    }

    #[test]
    fn test_escape_special_passes_unknown_input_through() {
        assert_eq!(escape_special("]"), "|]");
        assert_eq!(escape_special("x"), "x");
        assert_eq!(escape_special(""), "");
    }

    #[test]
    fn test_plain_text_is_borrowed() {
        let value = "nothing to see here: {}\"\\ ěščř 日本";
        assert!(matches!(escape(value), Cow::Borrowed(_)));
        assert_eq!(escape(value), value);
    }

    #[test]
    fn test_partial_unicode_escapes_are_left_alone() {
        assert_eq!(escape(r"\u12"), r"\u12");
        assert_eq!(escape(r"\uABCD"), r"\uABCD");
        assert_eq!(escape(r"\u12345"), "|0x12345");
        assert_eq!(escape(r"\\u0041"), r"\|0x0041");
    }
}
