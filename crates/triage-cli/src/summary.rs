//! Terminal output for triage results and the rule registry.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use triage_model::{FOLLOW_UP_AGED_OUT, FOLLOW_UP_REVIEW, RuleId};

use crate::commands::TriageRunResult;

pub fn print_outcome(result: &TriageRunResult) {
    println!("Patient age: {}", result.record.age);
    println!(
        "Polyps observed: {} (reported total {})",
        result.record.exam.polyps.len(),
        result.record.exam.total_polyp_count
    );
    if let Some(path) = &result.output_path {
        println!("Outcome payload: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Follow-up"),
        header_cell("Rule"),
        header_cell("Reason"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    table.add_row(vec![
        interval_cell(result.outcome.follow_up),
        Cell::new(result.outcome.rule.as_str())
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(&result.outcome.reason),
    ]);
    println!("{table}");
}

pub fn print_rules() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Follow-up"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for rule in RuleId::ALL {
        table.add_row(vec![
            Cell::new(rule.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            interval_cell(rule.follow_up_years()),
            Cell::new(rule.description()),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn interval_cell(follow_up: u8) -> Cell {
    match follow_up {
        FOLLOW_UP_REVIEW => Cell::new("review")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        FOLLOW_UP_AGED_OUT => Cell::new("aged out").fg(Color::Yellow),
        years => Cell::new(format!("{years}y")).fg(Color::Green),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
