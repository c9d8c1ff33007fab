//! The in-memory chat table.
//!
//! A [`ChatTable`] is an ordered list of [`ChatRow`]s together with the
//! ordered list of [`Column`]s it exposes. Rows keep file order. Tables are
//! never mutated after construction: [`filter`](ChatTable::filter) and
//! [`select`](ChatTable::select) return new tables.
//!
//! # Example
//!
//! ```
//! use chatlens::{ChatTable, Column};
//!
//! let table = chatlens::load_str(
//!     "[2024-01-15, 9:30 AM] Alice: Hello\n[2024-01-15, 9:31 AM] Bob: Hi",
//!     true,
//! )?;
//!
//! assert_eq!(table.columns(), Column::SPLIT);
//! assert_eq!(table.len(), 2);
//!
//! let senders = table.select(&[Column::Sender])?;
//! assert_eq!(senders.columns(), &[Column::Sender]);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChatlensError, Result};
use crate::message::{ChatRow, Timestamp};
use crate::parsing::line::split_timestamp;

/// A named column of a [`ChatTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    Timestamp,
    Date,
    Time,
    Sender,
    Content,
}

impl Column {
    /// Columns of a freshly loaded table.
    pub const RAW: &'static [Column] = &[Column::Timestamp, Column::Sender, Column::Content];

    /// Columns after timestamp splitting.
    pub const SPLIT: &'static [Column] =
        &[Column::Date, Column::Time, Column::Sender, Column::Content];

    /// Columns returned by keyword search.
    pub const SEARCH: &'static [Column] = &[Column::Date, Column::Sender, Column::Content];

    /// Returns the display name of the column.
    pub fn name(self) -> &'static str {
        match self {
            Column::Timestamp => "Timestamp",
            Column::Date => "Date",
            Column::Time => "Time",
            Column::Sender => "Sender",
            Column::Content => "Content",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered rows of parsed chat messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTable {
    columns: Vec<Column>,
    rows: Vec<ChatRow>,
}

impl ChatTable {
    /// Creates a table whose layout follows its rows.
    ///
    /// If every row has a split timestamp the layout is
    /// `[Date, Time, Sender, Content]`. Otherwise it is
    /// `[Timestamp, Sender, Content]` and any split timestamps are joined
    /// back with `", "`. An empty table gets the raw layout.
    pub fn new(rows: Vec<ChatRow>) -> Self {
        if !rows.is_empty() && rows.iter().all(|row| row.timestamp.is_split()) {
            return Self {
                columns: Column::SPLIT.to_vec(),
                rows,
            };
        }

        let rows = rows
            .into_iter()
            .map(|row| match row.timestamp {
                Timestamp::Split { .. } => ChatRow {
                    timestamp: Timestamp::Combined(row.timestamp.combined().into_owned()),
                    ..row
                },
                Timestamp::Combined(_) => row,
            })
            .collect();
        Self {
            columns: Column::RAW.to_vec(),
            rows,
        }
    }

    /// Creates a table with no rows and the given columns.
    pub fn empty(columns: &[Column]) -> Self {
        Self {
            columns: columns.to_vec(),
            rows: Vec::new(),
        }
    }

    /// Returns the visible columns, in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the rows, in file order.
    pub fn rows(&self) -> &[ChatRow] {
        &self.rows
    }

    /// Returns an iterator over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, ChatRow> {
        self.rows.iter()
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns `true` if `column` is visible in this table.
    pub fn has_column(&self, column: Column) -> bool {
        self.columns.contains(&column)
    }

    /// Fails with [`ChatlensError::MissingColumn`] unless `column` is visible.
    pub fn require_column(&self, column: Column) -> Result<()> {
        if self.has_column(column) {
            Ok(())
        } else {
            Err(ChatlensError::missing_column(column))
        }
    }

    /// Returns the values of one row for the visible columns, in order.
    pub fn record<'a>(&self, row: &'a ChatRow) -> Vec<&'a str> {
        self.columns
            .iter()
            .map(|&column| row.get(column).unwrap_or_default())
            .collect()
    }

    /// Returns the records of all rows for the visible columns.
    pub fn records(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        self.rows.iter().map(|row| self.record(row))
    }

    /// Returns a new table with the same columns and only rows matching `predicate`.
    pub fn filter<P>(&self, mut predicate: P) -> ChatTable
    where
        P: FnMut(&ChatRow) -> bool,
    {
        ChatTable {
            columns: self.columns.clone(),
            rows: self.rows.iter().filter(|row| predicate(row)).cloned().collect(),
        }
    }

    /// Returns a new table exposing only `columns`, in the given order.
    ///
    /// Fails with [`ChatlensError::MissingColumn`] for the first requested
    /// column this table does not expose.
    pub fn select(&self, columns: &[Column]) -> Result<ChatTable> {
        for &column in columns {
            self.require_column(column)?;
        }
        Ok(ChatTable {
            columns: columns.to_vec(),
            rows: self.rows.clone(),
        })
    }

    /// Splits every timestamp into date and time and switches to the
    /// `[Date, Time, Sender, Content]` layout.
    ///
    /// Already-split tables are returned unchanged. A timestamp without a
    /// comma fails the whole conversion.
    pub(crate) fn into_split(self) -> Result<ChatTable> {
        if !self.has_column(Column::Timestamp) {
            return Ok(self);
        }

        let rows = self
            .rows
            .into_iter()
            .map(|row| -> Result<ChatRow> {
                let timestamp = match row.timestamp {
                    Timestamp::Combined(raw) => {
                        let (date, time) = split_timestamp(&raw)?;
                        Timestamp::Split {
                            date: date.to_string(),
                            time: time.to_string(),
                        }
                    }
                    split @ Timestamp::Split { .. } => split,
                };
                Ok(ChatRow { timestamp, ..row })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ChatTable {
            columns: Column::SPLIT.to_vec(),
            rows,
        })
    }
}

impl<'a> IntoIterator for &'a ChatTable {
    type Item = &'a ChatRow;
    type IntoIter = std::slice::Iter<'a, ChatRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
