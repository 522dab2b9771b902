//! Ledger snapshot
//!
//! A `Ledger` is an immutable, ordered view of every entry recorded so far.
//! Appending produces a new snapshot and leaves the original untouched.

use std::sync::Arc;

use super::entry::Entry;

/// An immutable, insertion-ordered collection of entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: Arc<Vec<Entry>>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from entries, keeping their order
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Return a new snapshot with `entry` added at the end
    pub fn append(&self, entry: Entry) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.extend(self.entries.iter().cloned());
        entries.push(entry);
        Self::from_entries(entries)
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over expense entries only
    pub fn expenses(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.is_expense())
    }

    /// The most recently appended entries, newest last
    pub fn tail(&self, limit: usize) -> &[Entry] {
        let start = self.entries.len().saturating_sub(limit);
        &self.entries[start..]
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn test_append_returns_new_snapshot() {
        let empty = Ledger::new();
        let one = empty.append(Entry::income(day(1), Money::from_units(100)));

        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let ledger = Ledger::new()
            .append(Entry::expense(day(20), "Food", Money::from_units(5)))
            .append(Entry::expense(day(3), "Transport", Money::from_units(7)));

        let categories: Vec<_> = ledger.iter().map(|e| e.category()).collect();
        assert_eq!(categories, vec!["Food", "Transport"]);
    }

    #[test]
    fn test_tail() {
        let ledger = (1..=5).fold(Ledger::new(), |l, d| {
            l.append(Entry::expense(day(d), "Food", Money::from_units(d as i64)))
        });

        let tail = ledger.tail(2);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[1].date(), day(5));
        assert_eq!(ledger.tail(10).len(), 5);
    }
}
