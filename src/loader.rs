//! Loading chat logs into a [`ChatTable`].
//!
//! Every line of the log is matched against the chat line pattern
//! (`[<timestamp>] <sender>: <content>`). Lines that do not match are
//! dropped silently; they are indistinguishable from lines that were never
//! there. Matching lines keep their file order.
//!
//! With timestamp splitting enabled (the default) the resulting table has
//! the columns `[Date, Time, Sender, Content]`; otherwise
//! `[Timestamp, Sender, Content]`.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatlens::loader::ChatLoader;
//! use chatlens::config::LoaderConfig;
//!
//! // Free function, splitting timestamps
//! let table = chatlens::load("_chat.txt", true)?;
//!
//! // Or with an explicit configuration
//! let loader = ChatLoader::with_config(LoaderConfig::new().with_split_timestamp(false));
//! let raw = loader.load("_chat.txt")?;
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::config::LoaderConfig;
use crate::error::{ChatlensError, Result};
use crate::message::ChatRow;
use crate::parsing::line::parse_line;
use crate::table::ChatTable;

/// Loads chat logs according to a [`LoaderConfig`].
#[derive(Debug, Clone, Default)]
pub struct ChatLoader {
    config: LoaderConfig,
}

impl ChatLoader {
    /// Creates a loader with default configuration (timestamps are split).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a loader with custom configuration.
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Reads and parses the chat log at `path`.
    ///
    /// # Errors
    ///
    /// - [`ChatlensError::FileAccess`] if the file cannot be opened or is not
    ///   valid UTF-8
    /// - [`ChatlensError::InvalidTimestamp`] if splitting is enabled and a
    ///   timestamp has no comma
    pub fn load(&self, path: impl AsRef<Path>) -> Result<ChatTable> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ChatlensError::file_access(path, e))?;

        let mut rows = Vec::new();
        let mut skipped = 0usize;

        // the reader (and the file handle) is dropped on every return path
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| ChatlensError::file_access(path, e))?;
            match parse_row(&line) {
                Some(row) => rows.push(row),
                None => skipped += 1,
            }
        }

        info!(
            "Loaded {} messages from {} ({} lines skipped)",
            rows.len(),
            path.display(),
            skipped
        );
        self.build_table(rows)
    }

    /// Parses chat log text that is already in memory.
    pub fn load_str(&self, text: &str) -> Result<ChatTable> {
        let mut skipped = 0usize;
        let rows: Vec<ChatRow> = text
            .lines()
            .filter_map(|line| {
                let row = parse_row(line);
                if row.is_none() {
                    skipped += 1;
                }
                row
            })
            .collect();

        debug!("Parsed {} messages ({} lines skipped)", rows.len(), skipped);
        self.build_table(rows)
    }

    fn build_table(&self, rows: Vec<ChatRow>) -> Result<ChatTable> {
        let table = ChatTable::new(rows);
        if !self.config.split_timestamp {
            return Ok(table);
        }

        let split = table.into_split()?;
        debug!("Split timestamps of {} messages", split.len());
        Ok(split)
    }
}

fn parse_row(line: &str) -> Option<ChatRow> {
    parse_line(line).map(|parsed| ChatRow::new(parsed.timestamp, parsed.sender, parsed.content))
}

/// Loads the chat log at `path`, optionally splitting timestamps.
///
/// This is a shortcut for
/// `ChatLoader::with_config(LoaderConfig::new().with_split_timestamp(split_timestamp)).load(path)`.
///
/// # Example
///
/// ```rust,no_run
/// let table = chatlens::load("_chat.txt", true)?;
/// println!("{} messages", table.len());
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn load(path: impl AsRef<Path>, split_timestamp: bool) -> Result<ChatTable> {
    ChatLoader::with_config(LoaderConfig::new().with_split_timestamp(split_timestamp)).load(path)
}

/// Loads the chat log at `path` with timestamps split into date and time.
pub fn load_default(path: impl AsRef<Path>) -> Result<ChatTable> {
    ChatLoader::new().load(path)
}

/// Parses in-memory chat log text, optionally splitting timestamps.
///
/// # Example
///
/// ```rust
/// let table = chatlens::load_str(
///     "[2024-01-15, 9:30 AM] Alice: Hello\nnot a message\n[2024-01-15, 9:31 AM] Bob: Hi",
///     true,
/// )?;
/// assert_eq!(table.len(), 2);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn load_str(text: &str, split_timestamp: bool) -> Result<ChatTable> {
    ChatLoader::with_config(LoaderConfig::new().with_split_timestamp(split_timestamp))
        .load_str(text)
}
