//! The chat line pattern and timestamp splitting.
//!
//! A chat line looks like:
//!
//! ```text
//! [2024-01-15, 9:30 AM] Alice: Hello, how are you?
//! ```
//!
//! The bracket and sender captures are lazy, so the first `"] "` and the
//! first `": "` win. Everything after that belongs to the content, even if
//! it contains more colons or brackets.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ChatlensError, Result};

/// `[timestamp] sender: content`
pub(crate) const LINE_PATTERN: &str = r"^\[(.*?)\] (.*?): (.*)$";

static LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LINE_PATTERN).expect("line pattern is valid"));

/// The three captures of a matching line, borrowed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParsedLine<'a> {
    pub timestamp: &'a str,
    pub sender: &'a str,
    pub content: &'a str,
}

/// Parses one raw line, or returns `None` if it is not a chat message.
///
/// Surrounding whitespace (including a trailing `\r`) is stripped once
/// before matching. Captures are returned verbatim.
pub(crate) fn parse_line(line: &str) -> Option<ParsedLine<'_>> {
    let caps = LINE_REGEX.captures(line.trim())?;
    let (_, [timestamp, sender, content]) = caps.extract();
    Some(ParsedLine {
        timestamp,
        sender,
        content,
    })
}

/// Splits `"date, time"` at its first comma.
///
/// One space following the comma is dropped, so joining the parts with
/// `", "` gives back the original text.
pub(crate) fn split_timestamp(timestamp: &str) -> Result<(&str, &str)> {
    let (date, time) = timestamp
        .split_once(',')
        .ok_or_else(|| ChatlensError::invalid_timestamp(timestamp))?;
    Ok((date, time.strip_prefix(' ').unwrap_or(time)))
}
