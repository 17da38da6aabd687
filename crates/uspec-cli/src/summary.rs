use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use uspec_output::SavedOutput;

use crate::commands::GenerateResult;

pub fn print_generation_summary(result: &GenerateResult) {
    let report = &result.outcome.report;
    for warning in &result.outcome.warnings {
        eprintln!("warning: {warning} (input ignored)");
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Count")]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    let rows = [
        ("Keywords", report.keyword_count),
        ("Date tokens", report.date_token_count),
        ("Range tokens", report.range_token_count),
        ("Permutations", report.permutation_count),
        ("Candidates", report.candidate_count),
    ];
    for (label, count) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(count)]);
    }
    table.add_row(vec![
        Cell::new("Wordlist")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.final_count).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!("Steps: {}", report.executed_steps.join(" -> "));
    print_saved("Successfully written wordlist to", &result.saved);
}

pub fn print_merge_summary(saved: &SavedOutput) {
    print_saved("Successfully merged files and saved to", saved);
}

fn print_saved(action: &str, saved: &SavedOutput) {
    println!(
        "[+] {action} {} (containing {} lines).",
        saved.path.display(),
        group_thousands(saved.lines)
    );
}

/// `1234567` -> `1,234,567`.
fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
