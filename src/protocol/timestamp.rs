// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Formatting of the `timestamp` parameter attached to every message.

use chrono::{DateTime, Local, TimeZone};

/// `YYYY-MM-DDTHH:mm:ss.ffffff±HHMM`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f%z";

/// Formats `instant` the way TeamCity expects its `timestamp` parameter.
///
/// # Example
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use teamcity_messages::protocol::format_timestamp;
///
/// let offset = FixedOffset::east_opt(2 * 3600).unwrap();
/// let instant = offset.with_ymd_and_hms(2016, 3, 7, 9, 5, 1).unwrap();
/// assert_eq!(format_timestamp(&instant), "2016-03-07T09:05:01.000000+0200");
/// ```
pub fn format_timestamp<Tz>(instant: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    instant.format(TIMESTAMP_FORMAT).to_string()
}

/// Current instant in the local timezone.
pub fn now() -> String {
    format_timestamp(&Local::now())
}
