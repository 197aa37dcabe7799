//! Property verification types with TLA+ traceability.
//!
//! Every property checked against a lair maps back to an invariant in
//! `specs/lair.tla`.

use crate::counterexample::Counterexample;

/// Result of checking a single property, with TLA+ traceability.
///
/// `tla_spec` names the spec file and `tla_line` the line where the
/// invariant is defined, so a failure can be read next to the model.
#[derive(Debug, Clone)]
pub struct PropertyResult {
    /// Invariant name as written in the TLA+ spec (e.g., "PilesOrdered")
    pub name: &'static str,

    pub holds: bool,

    /// Description of the violation if the property doesn't hold
    pub violation: Option<String>,

    pub tla_spec: &'static str,

    pub tla_line: u32,

    /// States leading to the violation
    pub counterexample: Option<Counterexample>,
}

impl PropertyResult {
    /// Create a passing property result.
    #[must_use]
    pub fn pass(name: &'static str, tla_spec: &'static str, tla_line: u32) -> Self {
        debug_assert!(!name.is_empty(), "Property name must not be empty");
        debug_assert!(!tla_spec.is_empty(), "TLA+ spec must not be empty");
        debug_assert!(tla_line > 0, "TLA+ line must be positive");

        Self {
            name,
            holds: true,
            violation: None,
            tla_spec,
            tla_line,
            counterexample: None,
        }
    }

    /// Create a failing property result.
    #[must_use]
    pub fn fail(
        name: &'static str,
        tla_spec: &'static str,
        tla_line: u32,
        violation: String,
        counterexample: Option<Counterexample>,
    ) -> Self {
        debug_assert!(!name.is_empty(), "Property name must not be empty");
        debug_assert!(!tla_spec.is_empty(), "TLA+ spec must not be empty");
        debug_assert!(tla_line > 0, "TLA+ line must be positive");
        debug_assert!(!violation.is_empty(), "Violation description must not be empty");

        Self {
            name,
            holds: false,
            violation: Some(violation),
            tla_spec,
            tla_line,
            counterexample,
        }
    }

    /// Single-line status, e.g. `[PASS] PilesOrdered (lair.tla:44)`.
    #[must_use]
    pub fn format_status(&self) -> String {
        if self.holds {
            format!("[PASS] {} ({}:{})", self.name, self.tla_spec, self.tla_line)
        } else {
            format!(
                "[FAIL] {} ({}:{}): {}",
                self.name,
                self.tla_spec,
                self.tla_line,
                self.violation.as_deref().unwrap_or("unknown")
            )
        }
    }
}

/// Checks a set of invariants against some observed state.
pub trait PropertyChecker {
    /// Check every property. Passing properties are included too.
    fn check_all(&self) -> Vec<PropertyResult>;

    /// Verify all properties, returning the first failure.
    fn verify_all(&self) -> Result<(), PropertyResult> {
        match self.check_all().into_iter().find(|r| !r.holds) {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }

    fn all_hold(&self) -> bool {
        self.check_all().iter().all(|r| r.holds)
    }

    fn summary(&self) -> PropertySummary {
        let results = self.check_all();
        let passed = results.iter().filter(|r| r.holds).count() as u64;
        let failed = results.iter().filter(|r| !r.holds).count() as u64;
        let total = results.len() as u64;

        debug_assert!(passed + failed == total);

        PropertySummary {
            passed,
            failed,
            total,
            results,
        }
    }
}

/// Summary of property check results.
#[derive(Debug, Clone)]
pub struct PropertySummary {
    pub passed: u64,
    pub failed: u64,
    pub total: u64,
    pub results: Vec<PropertyResult>,
}

impl PropertySummary {
    /// Format as a report string, with the first counterexample appended.
    #[must_use]
    pub fn format_report(&self) -> String {
        let mut report = format!(
            "Property Check Summary: {}/{} passed\n",
            self.passed, self.total
        );

        for result in &self.results {
            report.push_str(&result.format_status());
            report.push('\n');
        }

        let first_counterexample = self
            .results
            .iter()
            .find(|r| !r.holds)
            .and_then(|r| r.counterexample.as_ref());
        if let Some(ce) = first_counterexample {
            report.push_str("\nCounterexample:\n");
            report.push_str(&ce.render_diagram());
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<PropertyResult>);

    impl PropertyChecker for Fixed {
        fn check_all(&self) -> Vec<PropertyResult> {
            self.0.clone()
        }
    }

    #[test]
    fn test_property_result_pass() {
        let result = PropertyResult::pass("PilesOrdered", "lair.tla", 44);
        assert!(result.holds);
        assert!(result.violation.is_none());
        assert!(result.counterexample.is_none());
    }

    #[test]
    fn test_format_status() {
        let pass = PropertyResult::pass("PilesOrdered", "lair.tla", 44);
        assert_eq!(pass.format_status(), "[PASS] PilesOrdered (lair.tla:44)");

        let fail = PropertyResult::fail(
            "PilesOrdered",
            "lair.tla",
            44,
            "log 3 rests on log 2".to_string(),
            None,
        );
        assert_eq!(
            fail.format_status(),
            "[FAIL] PilesOrdered (lair.tla:44): log 3 rests on log 2"
        );
    }

    #[test]
    fn test_verify_all_returns_first_failure() {
        let checker = Fixed(vec![
            PropertyResult::pass("UnitsConserved", "lair.tla", 39),
            PropertyResult::fail("PilesOrdered", "lair.tla", 44, "bad".to_string(), None),
            PropertyResult::fail("LegalMoves", "lair.tla", 48, "worse".to_string(), None),
        ]);

        let failure = checker.verify_all().unwrap_err();
        assert_eq!(failure.name, "PilesOrdered");
        assert!(!checker.all_hold());

        let summary = checker.summary();
        assert_eq!((summary.passed, summary.failed, summary.total), (1, 2, 3));
        assert!(summary.format_report().starts_with("Property Check Summary: 1/3 passed"));
    }

    #[test]
    fn test_report_includes_counterexample() {
        let checker = Fixed(vec![PropertyResult::fail(
            "LegalMoves",
            "lair.tla",
            48,
            "log 2 placed on log 1".to_string(),
            Some(Counterexample::with_seed(7)),
        )]);

        let report = checker.summary().format_report();
        assert!(report.contains("Counterexample:\nDST_SEED=7"));
    }
}
