//! Validation results.

use crate::error::CheckError;

use super::check::CheckKind;

/// Result of running a single check.
#[derive(Debug)]
pub struct CheckOutcome {
    /// The check that ran.
    pub check: CheckKind,
    /// `Ok` if the check passed.
    pub result: Result<(), CheckError>,
}

impl CheckOutcome {
    /// Create a passing outcome.
    pub fn passed(check: CheckKind) -> Self {
        Self {
            check,
            result: Ok(()),
        }
    }

    /// Create a failing outcome.
    pub fn failed(check: CheckKind, error: CheckError) -> Self {
        Self {
            check,
            result: Err(error),
        }
    }

    /// Whether the check passed.
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Ordered outcomes of one validation run.
#[derive(Debug, Default)]
pub struct ValidationReport {
    outcomes: Vec<CheckOutcome>,
}

impl ValidationReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an outcome.
    pub fn record(&mut self, outcome: CheckOutcome) {
        self.outcomes.push(outcome);
    }

    /// All outcomes, in execution order.
    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    /// Outcome of a specific check, if it ran.
    pub fn outcome(&self, check: CheckKind) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|o| o.check == check)
    }

    /// Failed checks and their errors, in execution order.
    pub fn failures(&self) -> impl Iterator<Item = (CheckKind, &CheckError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.check, e)))
    }

    /// Number of failed checks.
    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// Whether every recorded check passed.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(CheckOutcome::is_success)
    }

    /// Failure messages prefixed with their 1-based position.
    pub fn failure_lines(&self) -> Vec<String> {
        self.failures()
            .enumerate()
            .map(|(i, (_, err))| format!("{}. {}", i + 1, err))
            .collect()
    }
}
