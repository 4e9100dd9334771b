//! Data-quality findings.
//!
//! Validation operations and lossy casts report findings instead of failing
//! the run. Findings never block production of the result table; they are
//! surfaced as a side report, deduplicated by message text in first-seen
//! order.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// A value failed numeric parsing under VALIDATE:NUMERIC.
    NonNumeric,
    /// A value was empty or missing under VALIDATE:NOT_NULL.
    NullOrBlank,
    /// A non-empty value was replaced with zero by a numeric cast.
    UnparseableNumber,
    /// A non-empty value was set to missing by date reformatting.
    UnparseableDate,
}

/// A non-fatal data-quality record, tagged by column and violation kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityFinding {
    pub column: String,
    pub kind: FindingKind,
    pub message: String,
}

impl QualityFinding {
    pub fn new(column: impl Into<String>, kind: FindingKind) -> Self {
        let column = column.into();
        let message = match kind {
            FindingKind::NonNumeric => format!("Field '{column}': Non-numeric data found."),
            FindingKind::NullOrBlank => format!("Field '{column}': NULL/Blank values found."),
            FindingKind::UnparseableNumber => {
                format!("Field '{column}': Unparseable numeric values replaced with zero.")
            }
            FindingKind::UnparseableDate => {
                format!("Field '{column}': Unparseable date values set to missing.")
            }
        };
        Self {
            column,
            kind,
            message,
        }
    }
}

/// Accumulator for one projection run. Owned by the invocation and threaded
/// through every column transform; never process-wide.
#[derive(Debug, Default)]
pub struct QualityLog {
    findings: Vec<QualityFinding>,
    seen: BTreeSet<String>,
}

impl QualityLog {
    pub fn record(&mut self, column: &str, kind: FindingKind) {
        let finding = QualityFinding::new(column, kind);
        if self.seen.insert(finding.message.clone()) {
            self.findings.push(finding);
        }
    }

    pub fn findings(&self) -> &[QualityFinding] {
        &self.findings
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn into_findings(self) -> Vec<QualityFinding> {
        self.findings
    }
}

#[cfg(test)]
mod tests {
    use super::{FindingKind, QualityFinding};

    #[test]
    fn messages_name_the_column() {
        let finding = QualityFinding::new("status", FindingKind::NullOrBlank);
        assert_eq!(finding.message, "Field 'status': NULL/Blank values found.");

        let finding = QualityFinding::new("qty", FindingKind::NonNumeric);
        assert_eq!(finding.message, "Field 'qty': Non-numeric data found.");
    }
}
