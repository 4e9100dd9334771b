use recast_model::{Column, MappingEntry, QualityFinding, QualityLog, Table};
use recast_transform::{OpParseError, apply_ops, parse_sequence};
use tracing::debug;

/// Result of one projection run. Findings are already deduplicated, in
/// first-seen order; they never block production of the table.
#[derive(Debug, Clone)]
pub struct Projection {
    pub table: Table,
    pub findings: Vec<QualityFinding>,
    /// Entries whose source column existed and were applied.
    pub entries_applied: usize,
    /// Entries skipped because their source column was absent.
    pub entries_skipped: usize,
}

/// Run every mapping entry over a working copy of `input`, then project.
///
/// Entries run in configured order, each transform list mutating its source
/// column in the working copy, so later entries for the same source see the
/// earlier entries' output. Entries whose source is absent are skipped
/// outright; their tokens are never parsed, so a malformed token in a
/// skipped entry does not abort the run.
///
/// The output holds one column per distinct source, positioned where that
/// source was first recorded and renamed to the last alias recorded for it.
pub fn project(input: &Table, entries: &[MappingEntry]) -> Result<Projection, OpParseError> {
    let mut working = input.clone();
    let mut log = QualityLog::default();
    let mut renames: Vec<(String, String)> = Vec::new();
    let mut applied = 0usize;
    let mut skipped = 0usize;

    for entry in entries {
        let Some(column) = working.column_mut(&entry.source) else {
            debug!(source = %entry.source, "source column absent, entry skipped");
            skipped += 1;
            continue;
        };
        let ops = parse_sequence(&entry.transform)?;
        debug!(
            source = %entry.source,
            alias = %entry.alias,
            operations = ops.len(),
            "applying mapping entry"
        );
        apply_ops(column, &ops, &mut log);
        applied += 1;

        match renames.iter_mut().find(|(source, _)| source == &entry.source) {
            Some((_, alias)) => entry.alias.clone_into(alias),
            None => renames.push((entry.source.clone(), entry.alias.clone())),
        }
    }

    let mut table = Table::default();
    for (source, alias) in renames {
        // Recorded sources always exist in the working copy.
        if let Some(column) = working.column(&source) {
            table.push_column(Column::new(alias, column.values.clone()));
        }
    }

    Ok(Projection {
        table,
        findings: log.into_findings(),
        entries_applied: applied,
        entries_skipped: skipped,
    })
}
