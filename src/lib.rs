//! # Chatlens
//!
//! A Rust library for turning exported chat logs into a table and asking
//! simple questions of it: who sent how many messages, and which messages
//! mention a word.
//!
//! ## Input Format
//!
//! One message per line, in the bracketed form used by WhatsApp's iOS export:
//!
//! ```text
//! [2023-01-01, 12:00 PM] Alice: Hello, how are you?
//! [2023-01-01, 1:00 PM] Bob: I'm good, thanks!
//! ```
//!
//! Lines that do not match are skipped silently.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // Load and split timestamps into Date and Time
//!     let table = load("_chat.txt", true)?;
//!
//!     // Print message counts per sender and a bar chart
//!     report_sender_distribution(&table)?;
//!
//!     // Find every message mentioning "hello", any case
//!     let hits = search("hello", &table)?;
//!     print!("{}", to_text(&hits));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`loader`] — [`load`], [`load_str`], [`ChatLoader`](loader::ChatLoader)
//! - [`table`] — [`ChatTable`], [`Column`]
//! - [`message`] — [`ChatRow`], [`Timestamp`]
//! - [`core`] — Aggregation, search, rendering
//!   - [`core::distribution`] — [`sender_distribution`](core::sender_distribution)
//!   - [`core::search`] — [`search`](core::search()), [`count_word_usage`](core::count_word_usage)
//!   - [`core::output`] — [`to_text`](core::to_text), `to_csv`, `to_json`
//! - [`chart`] — [`BarChart`](chart::BarChart) text and SVG rendering
//! - [`report`] — [`report_sender_distribution`](report::report_sender_distribution)
//! - [`config`] — [`LoaderConfig`](config::LoaderConfig), [`ChartConfig`](config::ChartConfig), [`SearchConfig`](config::SearchConfig)
//! - [`error`] — [`ChatlensError`], [`Result`]
//! - [`prelude`] — Convenient re-exports

pub mod chart;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod loader;
pub mod message;
mod parsing;
pub mod report;
pub mod table;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use loader::{load, load_default, load_str};
pub use message::{ChatRow, Timestamp};
pub use table::{ChatTable, Column};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Table types
    pub use crate::{ChatRow, ChatTable, Column, Timestamp};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Loading
    pub use crate::loader::{ChatLoader, load, load_default, load_str};

    // Configs
    pub use crate::config::{ChartConfig, LoaderConfig, MatchMode, SearchConfig};

    // Aggregation and search
    pub use crate::core::{
        SenderDistribution, count_word_usage, search, search_with, sender_distribution,
    };

    // Rendering
    pub use crate::chart::BarChart;
    pub use crate::core::output::{TableFormat, render, to_text};
    pub use crate::report::{report_sender_distribution, report_sender_distribution_to};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::to_csv;
    #[cfg(feature = "json-output")]
    pub use crate::core::output::to_json;
}
