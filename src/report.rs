//! The sender distribution report.
//!
//! [`report_sender_distribution`] is the one-call convenience: it counts
//! messages per sender, prints the counts, and prints a text bar chart to
//! stdout. [`report_sender_distribution_to`] does the same to any writer and
//! hands the computed [`SenderDistribution`] back.
//!
//! # Example
//!
//! ```
//! use chatlens::config::ChartConfig;
//! use chatlens::report::report_sender_distribution_to;
//!
//! let table = chatlens::load_str("[d, 1] Alice: hi\n[d, 2] Bob: yo\n[d, 3] Alice: ok", true)?;
//!
//! let mut out = Vec::new();
//! let dist = report_sender_distribution_to(&mut out, &table, &ChartConfig::default())?;
//! assert_eq!(dist.get("Alice"), Some(2));
//!
//! let printed = String::from_utf8(out).unwrap();
//! assert!(printed.starts_with("Sender\nAlice  2\nBob    1\n"));
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::io::{self, Write};

use crate::chart::BarChart;
use crate::config::ChartConfig;
use crate::core::distribution::{SenderDistribution, sender_distribution};
use crate::error::Result;
use crate::table::{ChatTable, Column};

/// Prints per-sender message counts and a bar chart to stdout.
pub fn report_sender_distribution(table: &ChatTable) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report_sender_distribution_to(&mut out, table, &ChartConfig::default())?;
    Ok(())
}

/// Writes per-sender message counts and a bar chart to `out`.
///
/// Returns the distribution that was rendered.
pub fn report_sender_distribution_to<W: Write>(
    out: &mut W,
    table: &ChatTable,
    config: &ChartConfig,
) -> Result<SenderDistribution> {
    let distribution = sender_distribution(table);

    out.write_all(format_counts(&distribution).as_bytes())?;
    writeln!(out)?;
    let chart = BarChart::from_distribution(&distribution, config);
    out.write_all(chart.render_text().as_bytes())?;
    out.flush()?;

    Ok(distribution)
}

/// Formats the counts as a two-column listing headed by `Sender`.
///
/// # Format
/// ```text
/// Sender
/// Alice  2
/// Bob    1
/// ```
pub fn format_counts(distribution: &SenderDistribution) -> String {
    let width = distribution
        .iter()
        .map(|(sender, _)| sender.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(Column::Sender.name());
    out.push('\n');
    for (sender, count) in distribution.iter() {
        let pad = width - sender.chars().count();
        out.push_str(&format!("{sender}{}  {count}\n", " ".repeat(pad)));
    }
    out
}
