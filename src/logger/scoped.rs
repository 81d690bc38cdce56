// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Helpers that wrap a closure between a start and an end message.
//!
//! The end message is written whether the body returns `Ok`, returns `Err`
//! or panics. An error from the body wins over a failure to write the end
//! message, and a panic keeps unwinding once the end message was attempted.

use crate::errors::{MessageError, MessageResult};
use crate::logger::MessageLogger;
use crate::observability::messages::logger::{ScopeClosedDuringUnwind, ScopeEntered};
use crate::observability::messages::StructuredLog;

/// Writes the end message if dropped before [`CloseGuard::close`] ran.
struct CloseGuard<'a, C>
where
    C: FnOnce(&MessageLogger) -> MessageResult<()>,
{
    logger: &'a MessageLogger,
    scope: &'static str,
    name: &'a str,
    close: Option<C>,
}

impl<C> CloseGuard<'_, C>
where
    C: FnOnce(&MessageLogger) -> MessageResult<()>,
{
    fn close(mut self) -> MessageResult<()> {
        match self.close.take() {
            Some(close) => close(self.logger),
            None => Ok(()),
        }
    }
}

impl<C> Drop for CloseGuard<'_, C>
where
    C: FnOnce(&MessageLogger) -> MessageResult<()>,
{
    fn drop(&mut self) {
        // only still armed when the body panicked
        if let Some(close) = self.close.take() {
            let result = close(self.logger);
            ScopeClosedDuringUnwind {
                scope: self.scope,
                name: self.name,
                close_error: result.as_ref().err().map(|err| err as &dyn std::error::Error),
            }
            .log();
        }
    }
}

impl MessageLogger {
    /// Runs `body` inside a `blockOpened`/`blockClosed` pair.
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use teamcity_messages::logger::MessageLogger;
    /// use teamcity_messages::writers::MemoryWriter;
    ///
    /// let writer = Arc::new(MemoryWriter::new());
    /// let logger = MessageLogger::new(writer.clone(), None);
    ///
    /// let answer = logger
    ///     .block("Setup", "prepare fixtures", |logger| {
    ///         logger.message("creating database")?;
    ///         Ok::<_, teamcity_messages::errors::MessageError>(42)
    ///     })
    ///     .unwrap();
    ///
    /// assert_eq!(answer, 42);
    /// assert!(writer.contents().lines().last().unwrap().starts_with("##teamcity[blockClosed"));
    /// ```
    pub fn block<T, E, F>(&self, name: &str, description: &str, body: F) -> Result<T, E>
    where
        F: FnOnce(&Self) -> Result<T, E>,
        E: From<MessageError>,
    {
        self.block_opened(name, description)?;
        self.scoped("block", name, body, |logger| logger.block_closed(name))
    }

    /// Runs `body` inside a `compilationStarted`/`compilationFinished` pair.
    pub fn compilation<T, E, F>(&self, compiler_name: &str, body: F) -> Result<T, E>
    where
        F: FnOnce(&Self) -> Result<T, E>,
        E: From<MessageError>,
    {
        self.compilation_started(compiler_name)?;
        self.scoped("compilation", compiler_name, body, |logger| {
            logger.compilation_finished(compiler_name)
        })
    }

    /// Runs `body` inside a `progressStart`/`progressFinish` pair.
    pub fn progress<T, E, F>(&self, message: &str, body: F) -> Result<T, E>
    where
        F: FnOnce(&Self) -> Result<T, E>,
        E: From<MessageError>,
    {
        self.progress_start(message)?;
        self.scoped("progress", message, body, |logger| logger.progress_finish(message))
    }

    /// Runs `body` with service message processing disabled, for output that
    /// could be mistaken for service messages.
    pub fn without_service_messages<T, E, F>(&self, body: F) -> Result<T, E>
    where
        F: FnOnce(&Self) -> Result<T, E>,
        E: From<MessageError>,
    {
        self.disable_service_messages()?;
        self.scoped("service message suspension", "", body, |logger| {
            logger.enable_service_messages()
        })
    }

    fn scoped<T, E, F, C>(&self, scope: &'static str, name: &str, body: F, close: C) -> Result<T, E>
    where
        F: FnOnce(&Self) -> Result<T, E>,
        C: FnOnce(&Self) -> MessageResult<()>,
        E: From<MessageError>,
    {
        let guard = CloseGuard {
            logger: self,
            scope,
            name,
            close: Some(close),
        };

        let entered = ScopeEntered {
            scope,
            name,
            flow_id: self.flow_id(),
        };
        let span = entered.span("scoped_body");
        let result = {
            let _span_guard = span.enter();
            entered.log();
            body(self)
        };
        let closed = guard.close();

        let value = result?;
        closed?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::test_support::*;
    use std::panic::{self, AssertUnwindSafe};

    #[derive(Debug, PartialEq)]
    enum BodyError {
        Failed(&'static str),
        Message(String),
    }

    impl From<MessageError> for BodyError {
        fn from(err: MessageError) -> Self {
            BodyError::Message(err.to_string())
        }
    }

    type Body = fn(&MessageLogger) -> Result<&'static str, BodyError>;
    type Caller = fn(&MessageLogger, Body) -> Result<&'static str, BodyError>;

    fn run_block(logger: &MessageLogger, body: Body) -> Result<&'static str, BodyError> {
        logger.block("Foo", "bar", body)
    }

    fn run_compilation(logger: &MessageLogger, body: Body) -> Result<&'static str, BodyError> {
        logger.compilation("gcc", body)
    }

    fn run_progress(logger: &MessageLogger, body: Body) -> Result<&'static str, BodyError> {
        logger.progress("Foo", body)
    }

    fn run_without_service_messages(logger: &MessageLogger, body: Body) -> Result<&'static str, BodyError> {
        logger.without_service_messages(body)
    }

    fn scoped_cases() -> Vec<(&'static str, Caller, [&'static str; 2])> {
        vec![
            (
                "block",
                run_block as Caller,
                [
                    "##teamcity[blockOpened timestamp='*' name='Foo' description='bar']",
                    "##teamcity[blockClosed timestamp='*' name='Foo']",
                ],
            ),
            (
                "compilation",
                run_compilation as Caller,
                [
                    "##teamcity[compilationStarted timestamp='*' compilerName='gcc']",
                    "##teamcity[compilationFinished timestamp='*' compilerName='gcc']",
                ],
            ),
            (
                "progress",
                run_progress as Caller,
                [
                    "##teamcity[progressStart timestamp='*' message='Foo']",
                    "##teamcity[progressFinish timestamp='*' message='Foo']",
                ],
            ),
            (
                "without service messages",
                run_without_service_messages as Caller,
                [
                    "##teamcity[disableServiceMessages timestamp='*']",
                    "##teamcity[enableServiceMessages timestamp='*']",
                ],
            ),
        ]
    }

    #[test]
    fn test_scoped_returns_body_value() {
        for (name, caller, expected) in scoped_cases() {
            let (writer, logger) = memory_logger(None);

            let result = caller(&logger, |_| Ok("foo"));

            assert_eq!(result, Ok("foo"), "case: {}", name);
            assert_eq!(normalized(&writer), lines(&expected), "case: {}", name);
        }
    }

    #[test]
    fn test_scoped_rethrows_body_error_after_closing() {
        for (name, caller, expected) in scoped_cases() {
            let (writer, logger) = memory_logger(None);

            let result = caller(&logger, |_| Err(BodyError::Failed("Foo")));

            assert_eq!(result, Err(BodyError::Failed("Foo")), "case: {}", name);
            assert_eq!(normalized(&writer), lines(&expected), "case: {}", name);
        }
    }

    #[test]
    fn test_scoped_closes_on_panic() {
        for (name, caller, expected) in scoped_cases() {
            let (writer, logger) = memory_logger(None);

            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                caller(&logger, |_| panic!("body exploded"))
            }));

            let payload = outcome.expect_err("body panic should propagate");
            assert_eq!(payload.downcast_ref::<&str>(), Some(&"body exploded"), "case: {}", name);
            assert_eq!(normalized(&writer), lines(&expected), "case: {}", name);
        }
    }

    #[test]
    fn test_body_receives_same_logger() {
        let (writer, logger) = memory_logger(Some("flow-1"));

        logger
            .block("Outer", "", |inner| {
                assert_eq!(inner.flow_id(), Some("flow-1"));
                inner.message("inside")
            })
            .unwrap();

        assert_eq!(
            normalized(&writer),
            lines(&[
                "##teamcity[blockOpened timestamp='*' flowId='flow-1' name='Outer']",
                "##teamcity[message timestamp='*' flowId='flow-1' text='inside' status='NORMAL']",
                "##teamcity[blockClosed timestamp='*' flowId='flow-1' name='Outer']",
            ])
        );
    }

    #[test]
    fn test_close_failure_surfaces_when_body_succeeds() {
        let (writer, logger) = memory_logger(None);

        let result: Result<(), MessageError> = logger.scoped("block", "Foo", |_| Ok(()), |l| {
            l.write_message("not valid", std::iter::empty())
        });

        assert!(matches!(result, Err(MessageError::InvalidIdentifier(ref v)) if v == "not valid"));
        assert_eq!(writer.contents(), "");
    }

    #[test]
    fn test_body_error_wins_over_close_failure() {
        let (_writer, logger) = memory_logger(None);

        let result: Result<(), BodyError> = logger.scoped(
            "block",
            "Foo",
            |_| Err(BodyError::Failed("body")),
            |l| l.write_message("not valid", std::iter::empty()),
        );

        assert_eq!(result, Err(BodyError::Failed("body")));
    }

    #[test]
    fn test_body_runs_inside_scope_span() {
        tracing::subscriber::with_default(tracing_subscriber::registry(), || {
            let (_writer, logger) = memory_logger(None);
            assert!(tracing::Span::current().is_none());

            logger
                .compilation("gcc", |_| {
                    let current = tracing::Span::current();
                    assert_eq!(current.metadata().map(|m| m.name()), Some("scope"));
                    Ok::<_, BodyError>(())
                })
                .unwrap();

            assert!(tracing::Span::current().is_none());
        });
    }

    #[test]
    fn test_body_may_capture_mutable_state() {
        let (writer, logger) = memory_logger(None);
        let mut ran = false;

        let result = logger.block("Foo", "", |_| {
            ran = true;
            Ok::<_, BodyError>(())
        });

        assert!(result.is_ok());
        assert!(ran);
        assert_eq!(writer.take().lines().count(), 2);
    }
}
