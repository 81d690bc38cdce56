// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

/// Status of a plain build log message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageStatus {
    Normal,
    Warning,
    Failure,
    /// Fails the build when the build configuration is set to fail on logged errors.
    Error,
}

impl MessageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageStatus::Normal => "NORMAL",
            MessageStatus::Warning => "WARNING",
            MessageStatus::Failure => "FAILURE",
            MessageStatus::Error => "ERROR",
        }
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status reported through `buildStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildStatus {
    Success,
    Failure,
}

impl BuildStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildStatus::Success => "SUCCESS",
            BuildStatus::Failure => "FAILURE",
        }
    }
}

impl fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric value reported through `buildStatisticValue`.
///
/// # Example
/// ```
/// use teamcity_messages::logger::StatisticValue;
///
/// assert_eq!(StatisticValue::from(42).to_string(), "42");
/// assert_eq!(StatisticValue::from(0.25).to_string(), "0.25");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatisticValue {
    Integer(i64),
    Float(f64),
    /// Kept at single precision so it renders as written, not widened.
    Float32(f32),
}

impl StatisticValue {
    pub(crate) fn is_finite(&self) -> bool {
        match self {
            StatisticValue::Integer(_) => true,
            StatisticValue::Float(value) => value.is_finite(),
            StatisticValue::Float32(value) => value.is_finite(),
        }
    }
}

impl fmt::Display for StatisticValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatisticValue::Integer(value) => write!(f, "{}", value),
            StatisticValue::Float(value) => write!(f, "{}", value),
            StatisticValue::Float32(value) => write!(f, "{}", value),
        }
    }
}

macro_rules! statistic_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for StatisticValue {
                fn from(value: $ty) -> Self {
                    StatisticValue::Integer(i64::from(value))
                }
            }
        )*
    };
}

statistic_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for StatisticValue {
    fn from(value: f32) -> Self {
        StatisticValue::Float32(value)
    }
}

impl From<f64> for StatisticValue {
    fn from(value: f64) -> Self {
        StatisticValue::Float(value)
    }
}
