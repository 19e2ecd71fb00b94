//! Telemetry for the restriction runner.
//!
//! Structured logging via `tracing`, plus a probe event log for
//! restriction-relevant outcomes. All output goes to stderr; the runner
//! has no network dependencies.

mod logging;
pub mod probe_log;

pub use logging::{init_logging, LogConfig, LogError, LogFormat};
pub use probe_log::{log_probe_event, ProbeEvent, ProbeSeverity};
