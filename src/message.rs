//! Row type for parsed chat messages.
//!
//! Every line that matches `[<timestamp>] <sender>: <content>` becomes one
//! [`ChatRow`]. The timestamp is kept as opaque text: it is never parsed
//! into a date type, only optionally split at its first comma.
//!
//! # Example
//!
//! ```
//! use chatlens::{ChatRow, Timestamp};
//!
//! let row = ChatRow::new("2024-01-15, 9:30 AM", "Alice", "Hello!");
//! assert_eq!(row.sender(), "Alice");
//! assert_eq!(row.timestamp(), &Timestamp::Combined("2024-01-15, 9:30 AM".into()));
//! ```

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::table::Column;

/// The timestamp of a row, either as captured or split into date and time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// The bracketed text exactly as it appeared in the log.
    Combined(String),
    /// The timestamp after splitting at its first comma.
    Split {
        /// Text before the comma.
        date: String,
        /// Text after the comma, without the separating space.
        time: String,
    },
}

impl Timestamp {
    /// Returns the date part, if the timestamp has been split.
    pub fn date(&self) -> Option<&str> {
        match self {
            Timestamp::Split { date, .. } => Some(date),
            Timestamp::Combined(_) => None,
        }
    }

    /// Returns the time part, if the timestamp has been split.
    pub fn time(&self) -> Option<&str> {
        match self {
            Timestamp::Split { time, .. } => Some(time),
            Timestamp::Combined(_) => None,
        }
    }

    /// Returns the timestamp as `"date, time"` text.
    ///
    /// For a split timestamp this rejoins both parts with `", "`, which
    /// reproduces the original text for any `"D, T"` input.
    pub fn combined(&self) -> Cow<'_, str> {
        match self {
            Timestamp::Combined(raw) => Cow::Borrowed(raw),
            Timestamp::Split { date, time } => Cow::Owned(format!("{date}, {time}")),
        }
    }

    /// Returns `true` if the timestamp has been split.
    pub fn is_split(&self) -> bool {
        matches!(self, Timestamp::Split { .. })
    }
}

/// A single parsed chat message.
///
/// Rows are only ever built from lines that matched the chat format, so
/// sender and content are always present (possibly empty strings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRow {
    /// When the message was sent, as opaque text.
    pub timestamp: Timestamp,

    /// Display name of the message author.
    pub sender: String,

    /// Text content of the message. May contain colons and brackets.
    pub content: String,
}

impl ChatRow {
    /// Creates a row with an unsplit timestamp.
    pub fn new(
        timestamp: impl Into<String>,
        sender: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Timestamp::Combined(timestamp.into()),
            sender: sender.into(),
            content: content.into(),
        }
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the value of `column` for this row.
    ///
    /// `Timestamp` is only available before splitting; `Date` and `Time`
    /// only after.
    pub fn get(&self, column: Column) -> Option<&str> {
        match column {
            Column::Timestamp => match &self.timestamp {
                Timestamp::Combined(raw) => Some(raw),
                Timestamp::Split { .. } => None,
            },
            Column::Date => self.timestamp.date(),
            Column::Time => self.timestamp.time(),
            Column::Sender => Some(&self.sender),
            Column::Content => Some(&self.content),
        }
    }
}
