//! Test orchestration boundary.
//!
//! [`Harness`] is the contract an external test orchestrator provides to
//! scenarios: equality and truth assertions, explicit failure, and the
//! completion signal. [`RecordingHarness`] is the in-process
//! implementation used by the CLI and by tests; it captures per-scenario
//! failures and completion into a [`RunReport`].

use parking_lot::Mutex;

use crate::report::{RunReport, TestOutcome};

/// Assertion and completion primitives provided to a scenario.
///
/// A scenario must call [`Harness::succeed`] as its last statement; a
/// scenario that records no failure but never signals completion is
/// still counted as failed.
pub trait Harness: Send + Sync {
    /// Fail the current test if `expected != actual`.
    fn assert_eq(&self, expected: &str, actual: &str);

    /// Fail the current test with `message` if `condition` is false.
    fn assert_true(&self, condition: bool, message: &str);

    /// Immediately mark the current test failed.
    fn fail(&self, message: &str);

    /// Mark the current test passed.
    fn succeed(&self);
}

#[derive(Debug, Default)]
struct CurrentTest {
    name: String,
    failures: Vec<String>,
    succeeded: bool,
}

#[derive(Debug, Default)]
struct RecorderState {
    current: Option<CurrentTest>,
    finished: Vec<TestOutcome>,
}

/// Harness implementation that records outcomes per scenario.
#[derive(Debug, Default)]
pub struct RecordingHarness {
    state: Mutex<RecorderState>,
}

impl RecordingHarness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new test scope. Outcomes recorded until
    /// [`RecordingHarness::finish_test`] are attributed to `name`.
    pub fn begin_test(&self, name: &str) {
        let mut state = self.state.lock();
        state.current = Some(CurrentTest {
            name: name.to_string(),
            failures: Vec::new(),
            succeeded: false,
        });
    }

    /// Close the current test scope and record its outcome.
    ///
    /// A test passes iff `succeed()` was called and no failure was
    /// recorded.
    pub fn finish_test(&self) -> TestOutcome {
        let mut state = self.state.lock();
        let current = state.current.take().unwrap_or_default();
        let mut failures = current.failures;
        if failures.is_empty() && !current.succeeded {
            failures.push("test completed without succeed()".to_string());
        }
        let outcome = TestOutcome {
            name: current.name,
            passed: failures.is_empty(),
            failures,
        };
        state.finished.push(outcome.clone());
        outcome
    }

    /// Report over all finished tests.
    pub fn report(&self) -> RunReport {
        RunReport {
            outcomes: self.state.lock().finished.clone(),
        }
    }

    fn record_failure(&self, message: String) {
        let mut state = self.state.lock();
        match state.current.as_mut() {
            Some(current) => current.failures.push(message),
            None => tracing::warn!(failure = %message, "failure reported outside a test scope"),
        }
    }
}

impl Harness for RecordingHarness {
    fn assert_eq(&self, expected: &str, actual: &str) {
        if expected != actual {
            self.record_failure(format!("expected {:?}, got {:?}", expected, actual));
        }
    }

    fn assert_true(&self, condition: bool, message: &str) {
        if !condition {
            self.record_failure(message.to_string());
        }
    }

    fn fail(&self, message: &str) {
        self.record_failure(message.to_string());
    }

    fn succeed(&self) {
        let mut state = self.state.lock();
        if let Some(current) = state.current.as_mut() {
            current.succeeded = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passing_test_requires_succeed() {
        let harness = RecordingHarness::new();
        harness.begin_test("no_succeed");
        let outcome = harness.finish_test();
        assert!(!outcome.passed);
        assert_eq!(outcome.failures, vec!["test completed without succeed()"]);
    }

    #[test]
    fn succeed_with_no_failures_passes() {
        let harness = RecordingHarness::new();
        harness.begin_test("ok");
        harness.succeed();
        let outcome = harness.finish_test();
        assert!(outcome.passed);
        assert!(outcome.failures.is_empty());
    }

    #[test]
    fn failure_overrides_succeed() {
        let harness = RecordingHarness::new();
        harness.begin_test("failing");
        harness.fail("boom");
        harness.succeed();
        let outcome = harness.finish_test();
        assert!(!outcome.passed);
        assert_eq!(outcome.failures, vec!["boom"]);
    }

    #[test]
    fn assert_eq_records_both_sides() {
        let harness = RecordingHarness::new();
        harness.begin_test("eq");
        harness.assert_eq("want", "got");
        let outcome = harness.finish_test();
        assert_eq!(outcome.failures, vec!["expected \"want\", got \"got\""]);
    }
}
