//! CAPCHECK Restriction Assertion Runner
//!
//! Asserts that a packaged application context blocks a fixed list of
//! web-platform APIs by surfacing an error whose message matches an
//! expected pattern.
//!
//! # Design
//!
//! - **Injected environment**: the probed globals (`window`, `document`,
//!   `history`) are behind the [`env::WebEnv`] trait, never ambient
//!   state, so the runner executes against mock environments.
//! - **Explicit assertion policy**: substring-contains vs exact-equality
//!   is the [`runner::Expectation`] enum, not inferred from argument
//!   presence.
//! - **Parametrized probes**: each capability is asserted at every
//!   syntactic access path a caller might use.
//!
//! # Boundaries
//!
//! - Execution: single-threaded, synchronous; scenarios are independent
//! - Probe errors: caught by the assertion helper, never propagated
//! - Network: none; the synchronous XHR probe only asserts the rejection

pub mod config;
pub mod env;
pub mod harness;
pub mod report;
pub mod runner;
pub mod scenarios;
pub mod telemetry;

use config::RestrictionPolicy;
use env::WebEnv;
use harness::RecordingHarness;
use report::RunReport;

/// Run the built-in scenario suite against an environment.
pub fn run_builtin_suite(env: &dyn WebEnv, policy: &RestrictionPolicy) -> RunReport {
    let harness = RecordingHarness::new();
    runner::run_tests(env, policy, &harness, &scenarios::builtin_suite())
}
