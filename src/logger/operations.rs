// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! One method per service message kind.

use crate::errors::{MessageError, MessageResult};
use crate::logger::{
    BuildStatus, Entry, ImportDataOptions, ImportType, MessageLogger, MessageStatus,
    StatisticValue,
};
use crate::protocol::ensure_valid_identifier;

/// Durations are reported in 100-nanosecond ticks.
const TICKS_PER_SECOND: f64 = 10_000_000.0;

impl MessageLogger {
    // Build log messages

    /// Normal build log message.
    pub fn message(&self, text: &str) -> MessageResult<()> {
        self.log_message(text, MessageStatus::Normal, None)
    }

    pub fn warning(&self, text: &str) -> MessageResult<()> {
        self.log_message(text, MessageStatus::Warning, None)
    }

    pub fn failure(&self, text: &str) -> MessageResult<()> {
        self.log_message(text, MessageStatus::Failure, None)
    }

    /// Error message, optionally with details such as a stack trace.
    ///
    /// Fails the build when the build configuration is set to fail on error
    /// messages logged by the build runner.
    pub fn error(&self, text: &str, error_details: Option<&str>) -> MessageResult<()> {
        self.log_message(text, MessageStatus::Error, error_details)
    }

    fn log_message(
        &self,
        text: &str,
        status: MessageStatus,
        error_details: Option<&str>,
    ) -> MessageResult<()> {
        self.emit(
            "message",
            vec![
                Entry::named("text", Some(text)),
                Entry::named("status", Some(status.as_str())),
                Entry::named("errorDetails", error_details),
            ],
        )
    }

    // Blocks

    /// Opens a named block. An empty description is left out.
    pub fn block_opened(&self, name: &str, description: &str) -> MessageResult<()> {
        self.emit(
            "blockOpened",
            vec![
                Entry::named("name", Some(name)),
                Entry::named("description", Some(description).filter(|d| !d.is_empty())),
            ],
        )
    }

    /// Closes a named block together with every block still open inside it.
    pub fn block_closed(&self, name: &str) -> MessageResult<()> {
        self.emit("blockClosed", vec![Entry::named("name", Some(name))])
    }

    // Compilation

    /// Starts a compilation. Error messages until the matching
    /// [`compilation_finished`](Self::compilation_finished) count as compiler errors.
    pub fn compilation_started(&self, compiler_name: &str) -> MessageResult<()> {
        self.emit(
            "compilationStarted",
            vec![Entry::named("compilerName", Some(compiler_name))],
        )
    }

    pub fn compilation_finished(&self, compiler_name: &str) -> MessageResult<()> {
        self.emit(
            "compilationFinished",
            vec![Entry::named("compilerName", Some(compiler_name))],
        )
    }

    // Tests

    pub fn test_suite_started(&self, name: &str) -> MessageResult<()> {
        self.emit("testSuiteStarted", vec![Entry::named("name", Some(name))])
    }

    pub fn test_suite_finished(&self, name: &str) -> MessageResult<()> {
        self.emit("testSuiteFinished", vec![Entry::named("name", Some(name))])
    }

    /// Starts a test. With `capture_standard_output` the server attributes
    /// plain output up to `testFinished` to this test.
    pub fn test_started(&self, name: &str, capture_standard_output: bool) -> MessageResult<()> {
        self.emit(
            "testStarted",
            vec![
                Entry::named("name", Some(name)),
                Entry::named(
                    "captureStandardOutput",
                    Some(capture_standard_output.to_string()),
                ),
            ],
        )
    }

    /// Finishes a test, reporting `duration` in seconds as 100-ns ticks.
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use teamcity_messages::logger::MessageLogger;
    /// use teamcity_messages::writers::MemoryWriter;
    ///
    /// let writer = Arc::new(MemoryWriter::new());
    /// let logger = MessageLogger::new(writer.clone(), None);
    /// logger.test_finished("Foo", Some(10.123456789)).unwrap();
    ///
    /// assert!(writer.contents().contains(" name='Foo' duration='101234568']"));
    /// ```
    pub fn test_finished(&self, name: &str, duration: Option<f64>) -> MessageResult<()> {
        let ticks = duration
            .map(duration_ticks)
            .transpose()
            .map_err(|err| self.reject("testFinished", err))?;

        self.emit(
            "testFinished",
            vec![
                Entry::named("name", Some(name)),
                Entry::named("duration", ticks.map(|t| t.to_string())),
            ],
        )
    }

    /// Reports a test failure. Send at most one per test.
    pub fn test_failed(&self, name: &str, message: &str, details: Option<&str>) -> MessageResult<()> {
        self.emit(
            "testFailed",
            vec![
                Entry::named("name", Some(name)),
                Entry::named("message", Some(message)),
                Entry::named("details", details),
            ],
        )
    }

    /// Reports a failed equality assertion so the server can show a diff.
    pub fn test_failed_with_comparison(
        &self,
        name: &str,
        message: &str,
        details: Option<&str>,
        actual: &str,
        expected: &str,
    ) -> MessageResult<()> {
        self.emit(
            "testFailed",
            vec![
                Entry::named("name", Some(name)),
                Entry::named("message", Some(message)),
                Entry::named("details", details),
                Entry::named("type", Some("comparisonFailure")),
                Entry::named("actual", Some(actual)),
                Entry::named("expected", Some(expected)),
            ],
        )
    }

    /// Marks a test as ignored. Valid without a surrounding start and finish.
    pub fn test_ignored(&self, name: &str, message: &str, details: Option<&str>) -> MessageResult<()> {
        self.emit(
            "testIgnored",
            vec![
                Entry::named("name", Some(name)),
                Entry::named("message", Some(message)),
                Entry::named("details", details),
            ],
        )
    }

    pub fn test_std_out(&self, name: &str, out: &str) -> MessageResult<()> {
        self.emit(
            "testStdOut",
            vec![Entry::named("name", Some(name)), Entry::named("out", Some(out))],
        )
    }

    pub fn test_std_err(&self, name: &str, out: &str) -> MessageResult<()> {
        self.emit(
            "testStdErr",
            vec![Entry::named("name", Some(name)), Entry::named("out", Some(out))],
        )
    }

    // Artifacts and progress

    /// Publishes artifacts while the build is still running. `path` follows
    /// the artifact path rules of the build configuration.
    pub fn publish_artifacts(&self, path: &str) -> MessageResult<()> {
        self.emit("publishArtifacts", vec![Entry::named("path", Some(path))])
    }

    /// Shown until the next progress message or the next target starts.
    pub fn progress_message(&self, message: &str) -> MessageResult<()> {
        self.emit("progressMessage", vec![Entry::named("message", Some(message))])
    }

    pub fn progress_start(&self, message: &str) -> MessageResult<()> {
        self.emit("progressStart", vec![Entry::named("message", Some(message))])
    }

    pub fn progress_finish(&self, message: &str) -> MessageResult<()> {
        self.emit("progressFinish", vec![Entry::named("message", Some(message))])
    }

    // Build state

    /// Reports a build problem. Problems sharing an `identity` across builds
    /// are treated as the same problem, so the identity must be an identifier.
    pub fn build_problem(&self, description: &str, identity: Option<&str>) -> MessageResult<()> {
        if let Some(identity) = identity {
            ensure_valid_identifier(identity).map_err(|err| self.reject("buildProblem", err))?;
        }

        self.emit(
            "buildProblem",
            vec![
                Entry::named("description", Some(description)),
                Entry::named("identity", identity),
            ],
        )
    }

    /// Changes the build status and/or its text. At least one must be given.
    pub fn build_status(&self, status: Option<BuildStatus>, text: Option<&str>) -> MessageResult<()> {
        if status.is_none() && text.is_none() {
            return Err(self.reject(
                "buildStatus",
                MessageError::InvalidArgument(
                    "buildStatus needs a status, a text or both".to_string(),
                ),
            ));
        }

        self.emit(
            "buildStatus",
            vec![
                Entry::named("status", status.map(|s| s.as_str())),
                Entry::named("text", text),
            ],
        )
    }

    /// Sets the build number, sent as a single unnamed value.
    pub fn build_number(&self, build_number: &str) -> MessageResult<()> {
        self.write_value("buildNumber", build_number)
    }

    /// Adds or changes a build parameter for the following build steps.
    pub fn set_parameter(&self, name: &str, value: &str) -> MessageResult<()> {
        self.emit(
            "setParameter",
            vec![Entry::named("name", Some(name)), Entry::named("value", Some(value))],
        )
    }

    /// Reports a custom build statistic.
    pub fn build_statistic_value(
        &self,
        key: &str,
        value: impl Into<StatisticValue>,
    ) -> MessageResult<()> {
        let value = value.into();
        if !value.is_finite() {
            return Err(self.reject(
                "buildStatisticValue",
                MessageError::InvalidArgument(format!("statistic '{}' is not a finite number", key)),
            ));
        }

        self.emit(
            "buildStatisticValue",
            vec![
                Entry::named("key", Some(key)),
                Entry::named("value", Some(value.to_string())),
            ],
        )
    }

    // Service message processing

    /// Stops the server from parsing the following output as service messages.
    pub fn disable_service_messages(&self) -> MessageResult<()> {
        self.emit("disableServiceMessages", Vec::new())
    }

    pub fn enable_service_messages(&self) -> MessageResult<()> {
        self.emit("enableServiceMessages", Vec::new())
    }

    // Reports

    /// Asks the server to import a report file of the given format.
    pub fn import_data(
        &self,
        import_type: ImportType,
        path: &str,
        options: &ImportDataOptions,
    ) -> MessageResult<()> {
        let mut entries = vec![
            Entry::named("type", Some(import_type.as_str())),
            Entry::named("path", Some(path)),
        ];
        entries.extend(
            options
                .parameters()
                .into_iter()
                .map(|(key, value)| Entry::named(key, Some(value))),
        );

        self.emit("importData", entries)
    }
}

/// Converts seconds to rounded 100-ns ticks.
fn duration_ticks(seconds: f64) -> MessageResult<u64> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(MessageError::InvalidArgument(format!(
            "test duration must be a non-negative number of seconds, got {}",
            seconds
        )));
    }
    let ticks = (seconds * TICKS_PER_SECOND).round();
    if ticks >= u64::MAX as f64 {
        return Err(MessageError::InvalidArgument(format!(
            "test duration of {} seconds does not fit in 100-ns ticks",
            seconds
        )));
    }
    Ok(ticks as u64)
}
