//! Aggregation, search, and rendering over a [`ChatTable`](crate::ChatTable).
//!
//! This module contains:
//! - [`distribution`] - Message counts per sender
//! - [`search`] - Keyword search over message content
//! - [`output`] - Table renderers (text, CSV, JSON)
//!
//! None of these mutate their input; each returns a new value.

pub mod distribution;
pub mod output;
pub mod search;

pub use distribution::{SenderDistribution, sender_distribution};
pub use search::{count_word_usage, search, search_with};

#[cfg(feature = "csv-output")]
pub use output::to_csv;
#[cfg(feature = "json-output")]
pub use output::to_json;
pub use output::{TableFormat, render, to_text};
