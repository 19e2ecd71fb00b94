//! Tests for the assertion helper and outcome classification.

use capcheck::config::RestrictionPolicy;
use capcheck::env::{DocumentMethod, PackagedStubEnv, ProbeError, WebEnv};
use capcheck::harness::{Harness, RecordingHarness};
use capcheck::runner::{check_throws, AssertionError, Expectation, ScenarioCx, UNAVAILABLE_MARKER};

#[test]
fn probe_success_is_missing_restriction() {
    let result = check_throws(Ok(()), &Expectation::unavailable());
    assert_eq!(result, Err(AssertionError::MissingRestriction));
    assert_eq!(
        AssertionError::MissingRestriction.to_string(),
        "error not thrown"
    );
}

#[test]
fn matching_substring_passes() {
    let raised = ProbeError::unavailable("history.pushState()");
    assert!(check_throws(Err(raised), &Expectation::unavailable()).is_ok());
}

#[test]
fn wrong_message_is_mismatch_with_actual_preserved() {
    let raised = ProbeError::Opaque("TypeError: undefined".into());
    let result = check_throws(Err(raised), &Expectation::unavailable());
    match result {
        Err(AssertionError::Mismatch { expected, actual }) => {
            assert_eq!(expected, Expectation::unavailable());
            assert_eq!(actual, "TypeError: undefined");
        }
        other => panic!("unexpected classification: {:?}", other),
    }
}

#[test]
fn exact_expectation_requires_equality() {
    // Message contains the expected text but has a suffix; exact match
    // must still reject it.
    let raised = ProbeError::Opaque("INVALID_ACCESS_ERR: DOM Exception 15 (extra)".into());
    let expected = Expectation::Equals("INVALID_ACCESS_ERR: DOM Exception 15".into());
    assert!(check_throws(Err(raised), &expected).is_err());

    let exact = ProbeError::DomException {
        name: "INVALID_ACCESS_ERR".into(),
        code: 15,
    };
    assert!(check_throws(Err(exact), &expected).is_ok());
}

#[test]
fn probes_are_idempotent() {
    // Restrictions are stateless: repeating a probe yields the same
    // classification both times.
    let env = PackagedStubEnv::new();
    let expected = Expectation::unavailable();
    let first = check_throws(env.document_call(DocumentMethod::Write), &expected);
    let second = check_throws(env.document_call(DocumentMethod::Write), &expected);
    assert_eq!(first, second);
    assert!(first.is_ok());
}

#[test]
fn helper_reports_missing_restriction_to_harness() {
    let env = PackagedStubEnv::new();
    let policy = RestrictionPolicy::default();
    let harness = RecordingHarness::new();
    harness.begin_test("helper");
    let cx = ScenarioCx::new(&env, &harness, &policy, "helper");

    cx.assert_throws_error(|| Ok(()), Expectation::unavailable());

    let outcome = harness.finish_test();
    assert!(!outcome.passed);
    assert_eq!(outcome.failures, vec!["error not thrown"]);
}

#[test]
fn helper_reports_substring_mismatch_with_actual_message() {
    let env = PackagedStubEnv::new();
    let policy = RestrictionPolicy::default();
    let harness = RecordingHarness::new();
    harness.begin_test("helper");
    let cx = ScenarioCx::new(&env, &harness, &policy, "helper");

    cx.assert_throws_error(
        || Err(ProbeError::Opaque("SecurityError".into())),
        Expectation::unavailable(),
    );

    let outcome = harness.finish_test();
    assert_eq!(outcome.failures, vec!["Unexpected message SecurityError"]);
}

#[test]
fn helper_reports_exact_mismatch_via_assert_eq() {
    let env = PackagedStubEnv::new();
    let policy = RestrictionPolicy::default();
    let harness = RecordingHarness::new();
    harness.begin_test("helper");
    let cx = ScenarioCx::new(&env, &harness, &policy, "helper");

    cx.assert_throws_error(
        || Err(ProbeError::Opaque("NOT_FOUND_ERR: DOM Exception 8".into())),
        Expectation::Equals("INVALID_ACCESS_ERR: DOM Exception 15".into()),
    );

    let outcome = harness.finish_test();
    assert_eq!(
        outcome.failures,
        vec!["expected \"INVALID_ACCESS_ERR: DOM Exception 15\", got \"NOT_FOUND_ERR: DOM Exception 8\""]
    );
}

#[test]
fn helper_passes_silently_on_expected_error() {
    let env = PackagedStubEnv::new();
    let policy = RestrictionPolicy::default();
    let harness = RecordingHarness::new();
    harness.begin_test("helper");
    let cx = ScenarioCx::new(&env, &harness, &policy, "helper");

    cx.assert_throws_error(
        || env.document_call(DocumentMethod::Write),
        Expectation::unavailable(),
    );
    harness.succeed();

    let outcome = harness.finish_test();
    assert!(outcome.passed);
}

#[test]
fn default_marker_matches_the_spec_substring() {
    assert_eq!(UNAVAILABLE_MARKER, "is not available in packaged apps");
}
