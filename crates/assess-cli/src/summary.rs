use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use assess_cli::harness::LocaleValidation;

use crate::commands::CheckReport;

pub fn print_validation_summary(validations: &[LocaleValidation]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Locale"),
        header_cell("File"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for validation in validations {
        table.add_row(vec![
            Cell::new(validation.locale)
                .fg(comfy_table::Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(validation.file),
            count_cell(validation.report.error_count(), comfy_table::Color::Red),
            count_cell(
                validation.report.warning_count(),
                comfy_table::Color::Yellow,
            ),
        ]);
    }
    println!("{table}");
    print_findings(validations);
}

fn print_findings(validations: &[LocaleValidation]) {
    let mut any = false;
    for validation in validations {
        for error in &validation.report.errors {
            if !any {
                println!();
                println!("Structural config errors:");
                any = true;
            }
            println!("  [error] {error}");
        }
    }
    let mut any_warnings = false;
    for validation in validations {
        for warning in &validation.report.warnings {
            if !any_warnings {
                println!();
                println!("Warnings:");
                any_warnings = true;
            }
            println!("  [warn] {warning}");
        }
    }
    if !any {
        println!("No structural config errors detected.");
    }
}

pub fn print_check_summary(report: &CheckReport) {
    print_validation_summary(&report.validations);
    println!();

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Test"),
        header_cell("Locale"),
        header_cell("Status"),
        header_cell("Details"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for outcome in &report.outcomes {
        let (status, details) = if let Some(error) = &outcome.error {
            (
                Cell::new("ERROR").fg(comfy_table::Color::Red),
                error.clone(),
            )
        } else if outcome.mismatches.is_empty() {
            (
                Cell::new("PASS")
                    .fg(comfy_table::Color::Green)
                    .add_attribute(Attribute::Bold),
                "-".to_string(),
            )
        } else {
            (
                Cell::new("FAIL")
                    .fg(comfy_table::Color::Red)
                    .add_attribute(Attribute::Bold),
                outcome.mismatches.join(" "),
            )
        };
        table.add_row(vec![
            Cell::new(&outcome.name),
            Cell::new(&outcome.locale),
            status,
            Cell::new(details),
        ]);
    }
    println!("{table}");
    println!();
    println!("Tests passed: {}", report.passed());
    println!("Tests failed: {}", report.failed());
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(comfy_table::Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: comfy_table::Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(comfy_table::Color::DarkGrey)
    }
}
