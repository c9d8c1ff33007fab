//! JSON table rendering.

use serde_json::{Map, Value};

use crate::error::Result;
use crate::table::ChatTable;

/// Renders the table as a JSON array, one object per row.
///
/// Keys are the visible column names in column order.
///
/// # Format
/// ```json
/// [
///   {"Date": "2024-01-15", "Sender": "Alice", "Content": "Hello"}
/// ]
/// ```
pub fn to_json(table: &ChatTable) -> Result<String> {
    let rows: Vec<Value> = table
        .records()
        .map(|record| {
            let object: Map<String, Value> = table
                .columns()
                .iter()
                .zip(record)
                .map(|(column, value)| (column.name().to_string(), Value::from(value)))
                .collect();
            Value::Object(object)
        })
        .collect();

    Ok(serde_json::to_string_pretty(&rows)?)
}
