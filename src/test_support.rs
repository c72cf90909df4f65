//! Test utilities: a navigator that records calls instead of navigating.
//!
//! Compiled for the crate's own tests and behind the `test-support` feature.

use std::fmt::Display;

use crate::error::{InjectedFailure, InjectedFailureSnafu};
use crate::navigator::{Navigator, NavigatorCommand};

/// A navigator double that keeps a history of every call it receives.
#[derive(Debug)]
pub struct RecordingNavigator<R> {
    call_history: Vec<NavigatorCommand<R>>,
    calls: usize,
    fail_at: Option<usize>,
}

impl<R> Default for RecordingNavigator<R> {
    fn default() -> Self {
        Self {
            call_history: Vec::new(),
            calls: 0,
            fail_at: None,
        }
    }
}

impl<R> RecordingNavigator<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A navigator whose `call`-th call (0-based) fails with [`InjectedFailure`].
    /// The failing call is not recorded.
    pub fn failing_at(call: usize) -> Self {
        Self {
            fail_at: Some(call),
            ..Self::default()
        }
    }

    /// Calls received so far, oldest first.
    pub fn call_history(&self) -> &[NavigatorCommand<R>] {
        &self.call_history
    }

    /// Call history rendered as `push routeB`, `replaceAtIndex routeC 1`, ...
    pub fn call_log(&self) -> Vec<String>
    where
        R: Display,
    {
        self.call_history.iter().map(ToString::to_string).collect()
    }

    /// Forget every recorded call.
    pub fn reset_mock(&mut self) {
        self.call_history.clear();
        self.calls = 0;
    }

    fn record(&mut self, command: NavigatorCommand<R>) -> Result<(), InjectedFailure> {
        let call = self.calls;
        self.calls += 1;
        if self.fail_at == Some(call) {
            return InjectedFailureSnafu { call }.fail();
        }
        self.call_history.push(command);
        Ok(())
    }
}

impl<R> Navigator<R> for RecordingNavigator<R> {
    type Error = InjectedFailure;

    fn push(&mut self, route: R) -> Result<(), InjectedFailure> {
        self.record(NavigatorCommand::Push(route))
    }

    fn replace_at_index(&mut self, route: R, index: usize) -> Result<(), InjectedFailure> {
        self.record(NavigatorCommand::ReplaceAtIndex(route, index))
    }

    fn pop(&mut self) -> Result<(), InjectedFailure> {
        self.record(NavigatorCommand::Pop)
    }

    fn immediately_reset_route_stack(&mut self, routes: Vec<R>) -> Result<(), InjectedFailure> {
        self.record(NavigatorCommand::ImmediatelyResetRouteStack(routes))
    }
}

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Reads `RUST_LOG`, defaults to `warn`. Safe to call from every test.
#[cfg(feature = "test-support")]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
