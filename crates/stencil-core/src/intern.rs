//! Append-only interning tables

use std::hash::Hash;

use ahash::AHashMap;

/// Append-only table that stores each distinct value once
///
/// Values are compared by full structural equality. An index, once handed
/// out, always refers to the same value: entries are never removed or
/// replaced.
#[derive(Debug, Clone)]
pub struct Interner<T> {
    /// Distinct values in insertion order
    table: Vec<T>,
    /// Value -> index into `table`
    lookup: AHashMap<T, u32>,
}

impl<T: Hash + Eq + Clone> Interner<T> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            table: Vec::with_capacity(16),
            lookup: AHashMap::with_capacity(16),
        }
    }

    /// Create a table whose first entries are `reserved`, in order
    ///
    /// Host formats give some indices a fixed meaning (e.g. font 0 is the
    /// default font); seeding them keeps later indices aligned. A reserved
    /// value that repeats an earlier one still takes its own slot, but
    /// lookups return the first.
    pub fn with_reserved<I: IntoIterator<Item = T>>(reserved: I) -> Self {
        let mut interner = Self::new();
        for value in reserved {
            let index = interner.table.len() as u32;
            interner.lookup.entry(value.clone()).or_insert(index);
            interner.table.push(value);
        }
        interner
    }

    /// Get the index of `value`, appending it if it is not in the table yet
    pub fn intern(&mut self, value: T) -> u32 {
        if let Some(&index) = self.lookup.get(&value) {
            return index;
        }

        let index = self.table.len() as u32;
        self.lookup.insert(value.clone(), index);
        self.table.push(value);
        index
    }

    /// Index of `value` if it has been interned
    pub fn position(&self, value: &T) -> Option<u32> {
        self.lookup.get(value).copied()
    }

    /// Get a value by index
    pub fn get(&self, index: u32) -> Option<&T> {
        self.table.get(index as usize)
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Iterate over all entries with their indices
    pub fn iter(&self) -> impl Iterator<Item = (u32, &T)> {
        self.table.iter().enumerate().map(|(i, v)| (i as u32, v))
    }
}

impl<T: Hash + Eq + Clone> Default for Interner<T> {
    fn default() -> Self {
        Self::new()
    }
}
