//! Probe event logging.
//!
//! Structured logging for restriction-relevant probe outcomes, so a run
//! against a live platform leaves an auditable trail of which surfaces
//! were enforced and which were not.

/// Probe outcome categories worth logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeEvent {
    /// Probe was blocked with the expected message.
    RestrictionEnforced,
    /// Probe completed without an error being raised.
    RestrictionMissing,
    /// Probe was blocked, but the message did not match the expectation.
    MessageMismatch,
}

impl ProbeEvent {
    pub fn severity(&self) -> ProbeSeverity {
        match self {
            Self::RestrictionEnforced => ProbeSeverity::Debug,
            Self::RestrictionMissing => ProbeSeverity::Error,
            Self::MessageMismatch => ProbeSeverity::Warning,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RestrictionEnforced => "restriction_enforced",
            Self::RestrictionMissing => "restriction_missing",
            Self::MessageMismatch => "message_mismatch",
        }
    }
}

/// Severity levels for probe events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProbeSeverity {
    Debug,
    Info,
    Warning,
    Error,
}

impl ProbeSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

/// Log a probe event at the level mapped from its severity.
pub fn log_probe_event(event: ProbeEvent, scenario: &str, detail: &str) {
    let kind = event.as_str();
    match event.severity() {
        ProbeSeverity::Debug => tracing::debug!(event = kind, scenario, detail),
        ProbeSeverity::Info => tracing::info!(event = kind, scenario, detail),
        ProbeSeverity::Warning => tracing::warn!(event = kind, scenario, detail),
        ProbeSeverity::Error => tracing::error!(event = kind, scenario, detail),
    }
}
