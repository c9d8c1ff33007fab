//! CSV table rendering.

use crate::error::Result;
use crate::table::ChatTable;

/// Renders the table as CSV with a semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Header: the visible column names, e.g. `Date;Time;Sender;Content`
/// - Encoding: UTF-8
pub fn to_csv(table: &ChatTable) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(table.columns().iter().map(|c| c.name()))?;
    for record in table.records() {
        writer.write_record(&record)?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}
