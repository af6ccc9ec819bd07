use std::collections::BTreeMap;
use std::num::NonZeroUsize;

use rand::Rng;

use crate::error::{Error, Result};
use crate::selector::uniform_index;

/// Immutable, non-empty, ordered sequence of text entries.
///
/// Entries are meant to be unique but uniqueness is not enforced. A repeated
/// entry occupies several indices and is drawn proportionally more often;
/// [`CategoryTable::duplicates`] reports such entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTable {
    name: &'static str,
    entries: &'static [&'static str],
    len: NonZeroUsize,
}

impl CategoryTable {
    /// Build a table in const context.
    ///
    /// # Panics
    ///
    /// Panics when `entries` is empty. In a `static` initializer this is a
    /// compile-time error.
    pub const fn new(name: &'static str, entries: &'static [&'static str]) -> Self {
        let len = match NonZeroUsize::new(entries.len()) {
            Some(len) => len,
            None => panic!("category table must have at least one entry"),
        };
        Self { name, entries, len }
    }

    /// Build a table at runtime, rejecting empty input.
    pub fn try_new(name: &'static str, entries: &'static [&'static str]) -> Result<Self> {
        let len = NonZeroUsize::new(entries.len()).ok_or_else(|| {
            tracing::debug!(table = name, "rejected empty category table");
            Error::EmptyTable
        })?;
        Ok(Self { name, entries, len })
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn entries(&self) -> &'static [&'static str] {
        self.entries
    }

    pub const fn len(&self) -> usize {
        self.len.get()
    }

    /// Tables are never empty.
    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, value: &str) -> bool {
        self.entries.iter().any(|entry| *entry == value)
    }

    /// Uniformly pick one entry.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        self.entries[uniform_index(self.len, rng)]
    }

    /// Entries that appear more than once, in sorted order.
    pub fn duplicates(&self) -> Vec<&'static str> {
        let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
        for &entry in self.entries {
            *counts.entry(entry).or_insert(0) += 1;
        }
        counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(entry, _)| entry)
            .collect()
    }
}
