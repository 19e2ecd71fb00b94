//! Restriction assertion runner.
//!
//! The assertion helper invokes a probe and classifies the outcome
//! against an explicit [`Expectation`]. A probe that completes without
//! raising is a missing restriction; a probe that raises the wrong
//! message is a mismatch. Failures are reported to the harness; the
//! probe's error never propagates upward.

use std::fmt;

use thiserror::Error;

use crate::config::RestrictionPolicy;
use crate::env::{ProbeError, WebEnv};
use crate::harness::{Harness, RecordingHarness};
use crate::report::RunReport;
use crate::telemetry::{log_probe_event, ProbeEvent};

/// Substring every blocked-API message must contain by default.
pub const UNAVAILABLE_MARKER: &str = "is not available in packaged apps";

/// Expected-error descriptor.
///
/// The two assertion policies are explicit rather than inferred from
/// argument presence: substring containment for the blocked-API family,
/// exact equality for pinned platform messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation {
    /// Message must contain the substring.
    Contains(String),
    /// Message must equal the string exactly.
    Equals(String),
}

impl Expectation {
    /// Default policy: message contains [`UNAVAILABLE_MARKER`].
    pub fn unavailable() -> Self {
        Self::Contains(UNAVAILABLE_MARKER.to_string())
    }

    pub fn matches(&self, message: &str) -> bool {
        match self {
            Self::Contains(substring) => message.contains(substring),
            Self::Equals(exact) => message == exact,
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contains(substring) => write!(f, "message containing {:?}", substring),
            Self::Equals(exact) => write!(f, "message equal to {:?}", exact),
        }
    }
}

/// Classification of a probe outcome that failed its assertion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertionError {
    /// The probe completed without raising; the restriction is not
    /// enforced.
    #[error("error not thrown")]
    MissingRestriction,

    /// The probe raised, but the message failed the expectation. Carries
    /// the actual message for diagnostics.
    #[error("expected {expected}, got {actual:?}")]
    Mismatch {
        expected: Expectation,
        actual: String,
    },
}

/// Classify a probe outcome against an expectation.
pub fn check_throws(
    outcome: Result<(), ProbeError>,
    expected: &Expectation,
) -> Result<(), AssertionError> {
    match outcome {
        Ok(()) => Err(AssertionError::MissingRestriction),
        Err(raised) => {
            let actual = raised.message();
            if expected.matches(&actual) {
                Ok(())
            } else {
                Err(AssertionError::Mismatch {
                    expected: expected.clone(),
                    actual,
                })
            }
        }
    }
}

/// Context handed to a scenario: the probed environment, the harness to
/// report to, and the active message policy.
pub struct ScenarioCx<'a> {
    pub env: &'a dyn WebEnv,
    pub harness: &'a dyn Harness,
    pub policy: &'a RestrictionPolicy,
    scenario: &'a str,
}

impl<'a> ScenarioCx<'a> {
    pub fn new(
        env: &'a dyn WebEnv,
        harness: &'a dyn Harness,
        policy: &'a RestrictionPolicy,
        scenario: &'a str,
    ) -> Self {
        Self { env, harness, policy, scenario }
    }

    /// The policy's blocked-API substring expectation.
    pub fn expect_unavailable(&self) -> Expectation {
        Expectation::Contains(self.policy.unavailable_marker.clone())
    }

    /// Invoke `probe` and assert it raises per `expected`.
    ///
    /// Exactly one of {pass silently, report failure} per invocation.
    /// Never panics and never propagates the probe's error.
    pub fn assert_throws_error(
        &self,
        probe: impl FnOnce() -> Result<(), ProbeError>,
        expected: Expectation,
    ) {
        match check_throws(probe(), &expected) {
            Ok(()) => {
                log_probe_event(ProbeEvent::RestrictionEnforced, self.scenario, "");
            }
            Err(AssertionError::MissingRestriction) => {
                log_probe_event(
                    ProbeEvent::RestrictionMissing,
                    self.scenario,
                    "probe completed without raising",
                );
                self.harness.fail("error not thrown");
            }
            Err(AssertionError::Mismatch { expected, actual }) => {
                log_probe_event(ProbeEvent::MessageMismatch, self.scenario, &actual);
                match expected {
                    Expectation::Equals(exact) => self.harness.assert_eq(&exact, &actual),
                    Expectation::Contains(_) => self
                        .harness
                        .assert_true(false, &format!("Unexpected message {}", actual)),
                }
            }
        }
    }
}

/// A named scenario registered with the runner.
pub struct Scenario {
    pub name: &'static str,
    pub run: fn(&ScenarioCx<'_>),
}

/// Execute scenarios in registration order against one environment.
///
/// Scenarios are independent: a failure is terminal for its scenario but
/// does not abort the rest.
pub fn run_tests(
    env: &dyn WebEnv,
    policy: &RestrictionPolicy,
    harness: &RecordingHarness,
    scenarios: &[Scenario],
) -> RunReport {
    for scenario in scenarios {
        tracing::info!(scenario = scenario.name, "running scenario");
        harness.begin_test(scenario.name);
        let cx = ScenarioCx::new(env, harness, policy, scenario.name);
        (scenario.run)(&cx);
        let outcome = harness.finish_test();
        if outcome.passed {
            tracing::info!(scenario = scenario.name, "scenario passed");
        } else {
            tracing::error!(
                scenario = scenario.name,
                failures = ?outcome.failures,
                "scenario failed"
            );
        }
    }
    harness.report()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_throws_classifies_success_as_missing_restriction() {
        let result = check_throws(Ok(()), &Expectation::unavailable());
        assert_eq!(result, Err(AssertionError::MissingRestriction));
    }

    #[test]
    fn check_throws_accepts_matching_substring() {
        let raised = ProbeError::unavailable("document.write()");
        assert!(check_throws(Err(raised), &Expectation::unavailable()).is_ok());
    }

    #[test]
    fn check_throws_rejects_wrong_exact_message() {
        let raised = ProbeError::Opaque("SomeOtherError".into());
        let expected = Expectation::Equals("INVALID_ACCESS_ERR: DOM Exception 15".into());
        match check_throws(Err(raised), &expected) {
            Err(AssertionError::Mismatch { actual, .. }) => {
                assert_eq!(actual, "SomeOtherError");
            }
            other => panic!("unexpected classification: {:?}", other),
        }
    }

    #[test]
    fn expectation_display_names_the_policy() {
        assert_eq!(
            Expectation::Contains("x".into()).to_string(),
            "message containing \"x\""
        );
        assert_eq!(
            Expectation::Equals("y".into()).to_string(),
            "message equal to \"y\""
        );
    }
}
