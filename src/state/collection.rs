use std::ops::Range;

use super::data::FileEntry;
use crate::error::SessionError;

/// The FileCollection holds uploaded entries in insertion order.
///
/// Indices are dense from 0: removing an entry shifts every later
/// entry down by one.
#[derive(Debug, Default, Clone)]
pub struct FileCollection {
    entries: Vec<FileEntry>,
}

impl FileCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append entries after the last existing index.
    /// Returns the indices the new entries now occupy (empty for no input).
    pub fn append(&mut self, entries: impl IntoIterator<Item = FileEntry>) -> Range<usize> {
        let start = self.entries.len();
        self.entries.extend(entries);
        start..self.entries.len()
    }

    /// Remove the entry at `index`, compacting everything after it.
    pub fn remove_at(&mut self, index: usize) -> Result<FileEntry, SessionError> {
        if index >= self.entries.len() {
            return Err(SessionError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&FileEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }
}
