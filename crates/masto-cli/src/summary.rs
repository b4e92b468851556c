use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use masto_model::FrequencyTable;
use masto_output::format_percentage;

use masto_cli::types::{AnalysisRun, ColumnResult};

pub fn print_summary(run: &AnalysisRun) {
    println!("Input: {}", run.input.display());
    println!("Output: {}", run.output_dir.display());
    println!("Rows: {} (delimiter: {})", run.total_rows, run.delimiter);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Report"),
        header_cell("Items"),
        header_cell("Tokens"),
        header_cell("Skipped"),
        header_cell("Unmapped"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for result in &run.columns {
        table.add_row(vec![
            column_cell(result),
            Cell::new(result.output_path.display()),
            Cell::new(result.table.len()),
            Cell::new(result.stats.tokens),
            count_cell(result.stats.skipped_cells, Color::DarkGrey),
            count_cell(result.stats.fallbacks, Color::Yellow),
        ]);
    }
    for column in &run.skipped_columns {
        table.add_row(vec![
            Cell::new(column.column_name()).fg(Color::DarkGrey),
            Cell::new("column not found").fg(Color::Yellow),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
        ]);
    }
    println!("{table}");

    for result in &run.columns {
        println!();
        println!("{}:", result.column.description());
        println!("{}", frequency_table(&result.table));
    }
}

/// Render a frequency table as Item / Count / Percentage.
pub fn frequency_table(frequencies: &FrequencyTable) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Item"),
        header_cell("Count"),
        header_cell("Percentage"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for record in frequencies {
        let item = if record.item.is_empty() {
            dim_cell("(empty)")
        } else {
            Cell::new(&record.item)
        };
        table.add_row(vec![
            item,
            Cell::new(record.count),
            Cell::new(format!("{}%", format_percentage(record.percentage))),
        ]);
    }
    if frequencies.is_empty() {
        table.add_row(vec![dim_cell("no items"), dim_cell("-"), dim_cell("-")]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
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

fn column_cell(result: &ColumnResult) -> Cell {
    Cell::new(result.column.column_name())
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
