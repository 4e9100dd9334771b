//! Pipeline orchestration: configuration, ingest, projection, output.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use recast_ingest::{load_config, read_delimited_table};
use recast_map::project;
use recast_model::delimiter_byte;
use recast_report::write_delimited_table;

use crate::types::RunResult;

/// Everything `run` needs, resolved from CLI arguments.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub config: PathBuf,
    pub output: Option<PathBuf>,
    pub input_delimiter: Option<char>,
    pub output_delimiter: Option<char>,
    pub dry_run: bool,
}

/// Execute one full recast run.
pub fn run(options: &RunOptions) -> Result<RunResult> {
    let config = load_config(&options.config)?;

    // CLI overrides win over configured settings.
    let input_delimiter = options
        .input_delimiter
        .unwrap_or(config.settings.input_delimiter);
    let output_delimiter = options
        .output_delimiter
        .unwrap_or(config.settings.output_delimiter);
    let in_delim = delimiter_byte(input_delimiter).context("input delimiter")?;
    let out_delim = delimiter_byte(output_delimiter).context("output delimiter")?;

    let table = read_delimited_table(&options.input, in_delim)?;
    info!(
        rows = table.height(),
        columns = table.width(),
        input = %options.input.display(),
        "loaded input table"
    );

    let projection = project(&table, &config.mappings).context("apply mappings")?;
    info!(
        applied = projection.entries_applied,
        skipped = projection.entries_skipped,
        columns = projection.table.width(),
        "projection complete"
    );
    for finding in &projection.findings {
        warn!(column = %finding.column, "{}", finding.message);
    }

    let output = if options.dry_run {
        info!("dry run, output not written");
        None
    } else {
        let path = options
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&options.input));
        write_delimited_table(&projection.table, &path, out_delim)?;
        info!(rows = projection.table.height(), output = %path.display(), "output written");
        Some(path)
    };

    Ok(RunResult {
        input: options.input.clone(),
        output,
        rows: projection.table.height(),
        columns_in: table.width(),
        columns_out: projection.table.width(),
        entries_applied: projection.entries_applied,
        entries_skipped: projection.entries_skipped,
        findings: projection.findings,
    })
}

/// `data.csv` becomes `data_out.txt`, next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "recast".to_string());
    input.with_file_name(format!("{stem}_out.txt"))
}
