use std::path::PathBuf;

use recast_model::QualityFinding;

/// Outcome of one pipeline run, consumed by the summary printer.
#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    /// Written output path; `None` on a dry run.
    pub output: Option<PathBuf>,
    pub rows: usize,
    pub columns_in: usize,
    pub columns_out: usize,
    pub entries_applied: usize,
    pub entries_skipped: usize,
    pub findings: Vec<QualityFinding>,
}
