//! Configuration types for loading, charting, and searching.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`LoaderConfig`] - how a chat log is turned into a table
//! - [`ChartConfig`] - labels, width, and colours of the sender chart
//! - [`SearchConfig`] - how keyword search matches content
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{ChartConfig, LoaderConfig, SearchConfig};
//!
//! let loader = LoaderConfig::new().with_split_timestamp(false);
//! let chart = ChartConfig::new().with_width(60).with_title("Who talks most");
//! let search = SearchConfig::new().with_case_sensitive(true);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for loading a chat log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Split `Timestamp` into `Date` and `Time` (default: true)
    pub split_timestamp: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            split_timestamp: true,
        }
    }
}

impl LoaderConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables timestamp splitting.
    #[must_use]
    pub fn with_split_timestamp(mut self, enabled: bool) -> Self {
        self.split_timestamp = enabled;
        self
    }
}

/// Widest text bar [`ChartConfig::with_width`] accepts.
pub const MAX_BAR_WIDTH: usize = 1000;

/// Configuration for the sender distribution chart.
///
/// Colours are CSS colour names or hex values and only affect SVG output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Width of the longest bar in characters for text output (default: 40)
    pub width: usize,

    /// Chart title
    pub title: String,

    /// Label of the count axis
    pub x_label: String,

    /// Label of the sender axis
    pub y_label: String,

    /// Character used to draw text bars (default: '█')
    pub bar_char: char,

    /// Bar fill colour (default: skyblue)
    pub fill: String,

    /// Bar edge colour (default: steelblue)
    pub edge: String,

    /// Background of the count annotation boxes (default: lightblue)
    pub annotation_fill: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 40,
            title: "Distribution of Messages by Sender".to_string(),
            x_label: "Number of Messages".to_string(),
            y_label: "Senders".to_string(),
            bar_char: '█',
            fill: "skyblue".to_string(),
            edge: "steelblue".to_string(),
            annotation_fill: "lightblue".to_string(),
        }
    }
}

impl ChartConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the width of the longest text bar, clamped to `1..=MAX_BAR_WIDTH`.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.clamp(1, MAX_BAR_WIDTH);
        self
    }

    /// Sets the chart title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets both axis labels.
    #[must_use]
    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    /// Sets the character used for text bars.
    #[must_use]
    pub fn with_bar_char(mut self, bar_char: char) -> Self {
        self.bar_char = bar_char;
        self
    }

    /// Sets the SVG bar colours.
    #[must_use]
    pub fn with_colors(mut self, fill: impl Into<String>, edge: impl Into<String>) -> Self {
        self.fill = fill.into();
        self.edge = edge.into();
        self
    }
}

/// How the search word is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The word is a literal substring; regex metacharacters match themselves.
    #[default]
    Literal,
    /// The word is a regular expression.
    Pattern,
}

/// Configuration for keyword search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// How the word is interpreted (default: literal)
    pub mode: MatchMode,

    /// Match case exactly (default: false)
    pub case_sensitive: bool,
}

impl SearchConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the match mode.
    #[must_use]
    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Interprets the word as a regular expression.
    #[must_use]
    pub fn pattern(self) -> Self {
        self.with_mode(MatchMode::Pattern)
    }

    /// Enables or disables case-sensitive matching.
    #[must_use]
    pub fn with_case_sensitive(mut self, enabled: bool) -> Self {
        self.case_sensitive = enabled;
        self
    }
}
