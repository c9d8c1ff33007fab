//! Keyword search over message content.
//!
//! [`search`] keeps the rows whose content contains a word, ignoring case,
//! and returns them with the columns `[Date, Sender, Content]`. The word is
//! taken literally: characters such as `.` or `?` match themselves.
//!
//! Search runs on split tables only. A table without a `Date` column fails
//! with [`ChatlensError::MissingColumn`](crate::ChatlensError::MissingColumn).
//!
//! # Example
//!
//! ```
//! use chatlens::core::search::search;
//!
//! let table = chatlens::load_str(
//!     "[d, 1] Alice: Hello there\n[d, 2] Bob: bye\n[d, 3] Alice: say hello!",
//!     true,
//! )?;
//!
//! let hits = search("hello", &table)?;
//! assert_eq!(hits.len(), 2);
//! assert_eq!(hits.rows()[1].content, "say hello!");
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::config::{MatchMode, SearchConfig};
use crate::error::Result;
use crate::table::{ChatTable, Column};

/// Returns the rows whose content contains `word`, case-insensitively.
pub fn search(word: &str, table: &ChatTable) -> Result<ChatTable> {
    search_with(word, table, &SearchConfig::default())
}

/// Returns the rows whose content matches `word` under `config`.
///
/// # Errors
///
/// - [`ChatlensError::MissingColumn`](crate::ChatlensError::MissingColumn)
///   if `table` has no `Date` column
/// - [`ChatlensError::InvalidPattern`](crate::ChatlensError::InvalidPattern)
///   if `config` is in pattern mode and `word` is not a valid regex
pub fn search_with(word: &str, table: &ChatTable, config: &SearchConfig) -> Result<ChatTable> {
    table.require_column(Column::Date)?;

    let matcher = build_matcher(word, config)?;
    let hits = table
        .filter(|row| matcher.is_match(&row.content))
        .select(Column::SEARCH)?;

    debug!(
        "Search for {:?} matched {} of {} messages",
        word,
        hits.len(),
        table.len()
    );
    Ok(hits)
}

/// Counts the messages whose content contains `word`, case-insensitively.
pub fn count_word_usage(word: &str, table: &ChatTable) -> Result<usize> {
    search(word, table).map(|hits| hits.len())
}

/// Decides whether a message's content matches the search word.
enum Matcher {
    Regex(Regex),
    /// Literal word too large for the regex engine.
    Exact(String),
    /// Same, compared after lowercasing both sides.
    Folded(String),
}

impl Matcher {
    fn is_match(&self, content: &str) -> bool {
        match self {
            Matcher::Regex(regex) => regex.is_match(content),
            Matcher::Exact(word) => content.contains(word.as_str()),
            Matcher::Folded(word) => content.to_lowercase().contains(word.as_str()),
        }
    }
}

fn build_matcher(word: &str, config: &SearchConfig) -> Result<Matcher> {
    let pattern = match config.mode {
        MatchMode::Literal => regex::escape(word),
        MatchMode::Pattern => word.to_string(),
    };
    let built = RegexBuilder::new(&pattern)
        .case_insensitive(!config.case_sensitive)
        .build();

    match (built, config.mode) {
        (Ok(regex), _) => Ok(Matcher::Regex(regex)),
        // an escaped literal can only fail by exceeding the size limit
        (Err(e), MatchMode::Literal) => {
            debug!("Literal search word falls back to plain matching: {}", e);
            if config.case_sensitive {
                Ok(Matcher::Exact(word.to_string()))
            } else {
                Ok(Matcher::Folded(word.to_lowercase()))
            }
        }
        (Err(e), MatchMode::Pattern) => Err(e.into()),
    }
}
