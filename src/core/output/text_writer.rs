//! Plain text table rendering.

use crate::table::ChatTable;

const GAP: &str = "  ";

/// Renders the table as left-aligned text columns with a leading row index.
///
/// # Format
/// ```text
///    Date        Time      Sender  Content
/// 0  2023-01-01  12:00 PM  Alice   Hello, how are you?
/// 1  2023-01-01  1:00 PM   Bob     I'm good, thanks!
/// ```
///
/// The last column is not padded. An empty table renders its header only.
pub fn to_text(table: &ChatTable) -> String {
    let header: Vec<&str> = table.columns().iter().map(|c| c.name()).collect();
    let records: Vec<Vec<&str>> = table.records().collect();

    let index_width = table.len().saturating_sub(1).to_string().len();
    let mut widths: Vec<usize> = header.iter().map(|h| display_width(h)).collect();
    for record in &records {
        for (width, value) in widths.iter_mut().zip(record) {
            *width = (*width).max(display_width(value));
        }
    }

    let mut out = String::new();
    push_line(&mut out, &" ".repeat(index_width), &header, &widths);
    for (i, record) in records.iter().enumerate() {
        let index = format!("{i:<index_width$}");
        push_line(&mut out, &index, record, &widths);
    }
    out
}

fn push_line(out: &mut String, index: &str, cells: &[&str], widths: &[usize]) {
    out.push_str(index);
    let last = cells.len().saturating_sub(1);
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        out.push_str(GAP);
        out.push_str(cell);
        if i < last {
            out.push_str(&" ".repeat(width - display_width(cell)));
        }
    }
    out.push('\n');
}

fn display_width(s: &str) -> usize {
    s.chars().count()
}
