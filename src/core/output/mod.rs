//! Table renderers.
//!
//! Every renderer turns a [`ChatTable`](crate::ChatTable) into a `String`
//! using its visible columns, in order. Nothing is written to disk.
//!
//! - [`to_text`] - aligned columns with a row index, for terminals
//! - [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`to_json`] - JSON array of objects keyed by column name - requires `json-output` feature
//!
//! # Example
//!
//! ```rust
//! use chatlens::core::output::{TableFormat, render};
//!
//! let table = chatlens::load_str("[2024-01-15, 9:30 AM] Alice: Hello", true)?;
//! let text = render(&table, TableFormat::Text)?;
//! assert!(text.starts_with("   Date"));
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::to_csv;
#[cfg(feature = "json-output")]
pub use json_writer::to_json;
pub use text_writer::to_text;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::table::ChatTable;

/// Rendering format for tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum TableFormat {
    /// Aligned plain text (default)
    #[default]
    Text,

    /// CSV with semicolon delimiter
    #[cfg(feature = "csv-output")]
    Csv,

    /// JSON array of row objects
    #[cfg(feature = "json-output")]
    Json,
}

impl std::fmt::Display for TableFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableFormat::Text => write!(f, "Text"),
            #[cfg(feature = "csv-output")]
            TableFormat::Csv => write!(f, "CSV"),
            #[cfg(feature = "json-output")]
            TableFormat::Json => write!(f, "JSON"),
        }
    }
}

/// Renders `table` in the given format.
pub fn render(table: &ChatTable, format: TableFormat) -> Result<String> {
    match format {
        TableFormat::Text => Ok(to_text(table)),
        #[cfg(feature = "csv-output")]
        TableFormat::Csv => to_csv(table),
        #[cfg(feature = "json-output")]
        TableFormat::Json => to_json(table),
    }
}
