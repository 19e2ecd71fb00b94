//! Run results, serializable for export.

use serde::Serialize;

/// Outcome of one scenario.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TestOutcome {
    pub name: String,
    pub passed: bool,
    pub failures: Vec<String>,
}

/// Outcomes of a full run, in registration order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub outcomes: Vec<TestOutcome>,
}

impl RunReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// Pretty-printed JSON export of the report.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_partition_outcomes() {
        let report = RunReport {
            outcomes: vec![
                TestOutcome { name: "a".into(), passed: true, failures: vec![] },
                TestOutcome { name: "b".into(), passed: false, failures: vec!["x".into()] },
            ],
        };
        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 1);
        assert!(!report.all_passed());
    }

    #[test]
    fn json_export_includes_failures() {
        let report = RunReport {
            outcomes: vec![TestOutcome {
                name: "sync_xhr".into(),
                passed: false,
                failures: vec!["expected \"a\", got \"b\"".into()],
            }],
        };
        let json = report.to_json().unwrap();
        assert!(json.contains("sync_xhr"));
        assert!(json.contains("expected"));
    }
}
