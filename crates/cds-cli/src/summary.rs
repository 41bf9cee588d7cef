//! Terminal tables for catalog listings and ward censuses.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cds_model::WardCensus;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn print_census(census: &WardCensus) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Ward"),
        header_cell("Total"),
        header_cell("Occupied"),
        header_cell("Free"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for row in &census.rows {
        table.add_row(vec![
            Cell::new(row.ward.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(row.total),
            count_cell(row.occupied, Color::Yellow),
            free_cell(row.free),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(census.total_beds()).add_attribute(Attribute::Bold),
        Cell::new(census.total_occupied()).add_attribute(Attribute::Bold),
        Cell::new(census.total_free()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(value: usize, color: Color) -> Cell {
    if value > 0 {
        Cell::new(value).fg(color)
    } else {
        Cell::new(value).fg(Color::DarkGrey)
    }
}

fn free_cell(value: usize) -> Cell {
    if value == 0 {
        Cell::new(value).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        Cell::new(value).fg(Color::Green)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
