//! Message counts per sender.
//!
//! [`sender_distribution`] is the pure half of the sender report: it groups
//! the table by sender and counts rows. Rendering lives in
//! [`crate::chart`] and printing in [`crate::report`].
//!
//! Senders are ordered by name (byte-wise, which for UTF-8 is code-point
//! order), never by first appearance.
//!
//! # Example
//!
//! ```
//! use chatlens::core::distribution::sender_distribution;
//!
//! let table = chatlens::load_str(
//!     "[d, 1] Bob: hi\n[d, 2] Alice: hello\n[d, 3] Alice: again",
//!     true,
//! )?;
//! let dist = sender_distribution(&table);
//!
//! let counts: Vec<_> = dist.iter().collect();
//! assert_eq!(counts, vec![("Alice", 2), ("Bob", 1)]);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::table::ChatTable;

/// Number of messages per sender, ordered by sender name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SenderDistribution {
    counts: BTreeMap<String, usize>,
}

/// One entry of a [`SenderDistribution`], as serialized.
#[derive(Debug, Serialize)]
struct SenderCount<'a> {
    sender: &'a str,
    count: usize,
}

impl SenderDistribution {
    /// Returns `(sender, count)` pairs in sender order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(sender, &count)| (sender.as_str(), count))
    }

    /// Returns the count for `sender`, if it sent anything.
    pub fn get(&self, sender: &str) -> Option<usize> {
        self.counts.get(sender).copied()
    }

    /// Returns the number of distinct senders.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if there are no senders.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns the total number of messages.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Returns the largest count, or 0 when empty.
    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }
}

impl Serialize for SenderDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            self.iter()
                .map(|(sender, count)| SenderCount { sender, count }),
        )
    }
}

/// Groups `table` by sender and counts messages.
pub fn sender_distribution(table: &ChatTable) -> SenderDistribution {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for row in table {
        *counts.entry(row.sender.clone()).or_default() += 1;
    }
    SenderDistribution { counts }
}
