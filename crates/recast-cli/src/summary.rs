//! Console summary printed after a run.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use recast_report::render_quality_report;

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run)"),
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Columns in"),
        header_cell("Columns out"),
        header_cell("Entries applied"),
        header_cell("Entries skipped"),
        header_cell("Findings"),
    ]);
    apply_summary_table_style(&mut table);
    table.add_row(vec![
        Cell::new(result.rows),
        Cell::new(result.columns_in),
        Cell::new(result.columns_out),
        Cell::new(result.entries_applied),
        count_cell(result.entries_skipped, Color::Yellow),
        count_cell(result.findings.len(), Color::Red),
    ]);
    println!("{table}");

    let report = render_quality_report(&result.findings);
    if report.is_empty() {
        println!("No data-quality findings.");
    } else {
        print!("{report}");
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for index in 0..table.column_count() {
        align_column(table, index, CellAlignment::Right);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
