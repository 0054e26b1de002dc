//! Assertion types and builders for verifying step results.

use std::collections::BTreeMap;

use motif_query::{FindOutcome, QueryResult};

use crate::error::{ScenarioError, ScenarioResult};
use crate::host::NamedGraph;

/// One accepted mapping, motif node name to host node name.
pub type Row = BTreeMap<String, String>;

/// A complete assertion for a step result.
#[derive(Debug, Default)]
pub struct Assertion {
    // Result size
    pub count: Option<usize>,
    pub empty: Option<bool>,

    // Result rows
    pub contains: Vec<Row>,
    pub excludes: Vec<Row>,
    pub exactly: Option<Vec<Row>>,
    pub ordered: Option<Vec<Row>>,

    // Pipeline counters
    pub pulled_max: Option<usize>,
    pub limit_reached: Option<bool>,

    // Error assertions
    pub error: Option<String>,
}

impl Assertion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Verify a step result against this assertion.
    pub fn verify(
        &self,
        step: &str,
        host: &NamedGraph,
        result: &QueryResult<FindOutcome>,
    ) -> ScenarioResult<()> {
        let outcome = match (result, &self.error) {
            (Err(err), Some(expected)) => {
                let message = err.to_string();
                if !message.contains(expected.as_str()) {
                    return Err(ScenarioError::assertion_failed(
                        step,
                        format!("expected error containing '{expected}', got '{message}'"),
                    ));
                }
                return Ok(());
            }
            (Err(err), None) => return Err(ScenarioError::step_execution(step, err.to_string())),
            (Ok(outcome), Some(expected)) => {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "expected error containing '{expected}', got {} mappings",
                        outcome.mappings.len()
                    ),
                ));
            }
            (Ok(outcome), None) => outcome,
        };

        let rows: Vec<Row> = outcome.mappings.iter().map(|m| host.row(m)).collect();

        if let Some(expected) = self.count {
            if rows.len() != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "expected {} mappings, got {}: {}",
                        expected,
                        rows.len(),
                        format_rows(&rows)
                    ),
                ));
            }
        }

        if let Some(expected) = self.empty {
            if rows.is_empty() != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "expected empty={}, got {}",
                        expected,
                        format_rows(&rows)
                    ),
                ));
            }
        }

        for expected in &self.contains {
            if !rows.contains(expected) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "missing mapping {}\n  actual: {}",
                        format_row(expected),
                        format_rows(&rows)
                    ),
                ));
            }
        }

        for unexpected in &self.excludes {
            if rows.contains(unexpected) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("unexpected mapping {}", format_row(unexpected)),
                ));
            }
        }

        if let Some(expected) = &self.exactly {
            let mut want = expected.clone();
            let mut got = rows.clone();
            want.sort();
            got.sort();
            if want != got {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "mapping set mismatch:\n  expected: {}\n  actual:   {}",
                        format_rows(&want),
                        format_rows(&got)
                    ),
                ));
            }
        }

        if let Some(expected) = &self.ordered {
            if expected != &rows {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "mapping order mismatch:\n  expected: {}\n  actual:   {}",
                        format_rows(expected),
                        format_rows(&rows)
                    ),
                ));
            }
        }

        if let Some(max) = self.pulled_max {
            if outcome.stats.pulled > max {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "expected at most {} candidates pulled, got {}",
                        max, outcome.stats.pulled
                    ),
                ));
            }
        }

        if let Some(expected) = self.limit_reached {
            if outcome.stats.limit_reached != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "expected limit_reached={}, got {}",
                        expected, outcome.stats.limit_reached
                    ),
                ));
            }
        }

        Ok(())
    }
}

fn format_row(row: &Row) -> String {
    let fields: Vec<String> = row.iter().map(|(k, v)| format!("{k}: {v}")).collect();
    format!("{{{}}}", fields.join(", "))
}

fn format_rows(rows: &[Row]) -> String {
    let rendered: Vec<String> = rows.iter().map(format_row).collect();
    format!("[{}]", rendered.join(", "))
}

/// Builder for fluent assertion construction.
#[derive(Debug, Default)]
pub struct AssertionBuilder {
    assertion: Assertion,
}

impl AssertionBuilder {
    /// Create a new assertion builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the assertion.
    pub fn build(self) -> Assertion {
        self.assertion
    }

    // ========== Result size ==========

    /// Assert that exactly N mappings were accepted.
    pub fn count(mut self, n: usize) -> Self {
        self.assertion.count = Some(n);
        self
    }

    /// Assert that no mapping was accepted.
    pub fn empty(mut self) -> Self {
        self.assertion.empty = Some(true);
        self
    }

    // ========== Result rows ==========

    /// Assert that this mapping is among the results.
    pub fn contains(mut self, row: Row) -> Self {
        self.assertion.contains.push(row);
        self
    }

    /// Assert that this mapping is not among the results.
    pub fn excludes(mut self, row: Row) -> Self {
        self.assertion.excludes.push(row);
        self
    }

    /// Assert the result set, ignoring order.
    pub fn exactly(mut self, rows: &[Row]) -> Self {
        self.assertion.exactly = Some(rows.to_vec());
        self
    }

    /// Assert the results in acceptance order.
    pub fn ordered(mut self, rows: &[Row]) -> Self {
        self.assertion.ordered = Some(rows.to_vec());
        self
    }

    // ========== Pipeline counters ==========

    /// Assert that the oracle was asked for at most N candidates.
    pub fn pulled_at_most(mut self, n: usize) -> Self {
        self.assertion.pulled_max = Some(n);
        self
    }

    /// Assert whether the result limit stopped the search.
    pub fn limit_reached(mut self, reached: bool) -> Self {
        self.assertion.limit_reached = Some(reached);
        self
    }

    // ========== Error assertions ==========

    /// Assert that the search fails with an error containing `fragment`.
    pub fn error(mut self, fragment: impl Into<String>) -> Self {
        self.assertion.error = Some(fragment.into());
        self
    }
}
