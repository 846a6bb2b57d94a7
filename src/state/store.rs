use std::fmt;

use super::data::Record;
use crate::error::AdminError;

/// Stable identifier assigned to a record when it is first stored.
///
/// Ids are never reused within a store, so a row action that captured an
/// id keeps pointing at the same record even after other rows are deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The RecordStore holds one ordered collection of records.
///
/// Order is insertion order: edits keep a record's position and
/// removals close the gap.
#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    entries: Vec<(RecordId, R)>,
    next_id: u64,
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }
}

impl<R: Record> RecordStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a record at the end and return its new id
    pub fn append(&mut self, record: R) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, record));
        id
    }

    /// Current position of a record, if it is still stored
    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.entries.iter().position(|(entry_id, _)| *entry_id == id)
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.position(id)
            .and_then(|index| self.at(index))
            .map(|(_, record)| record)
    }

    /// Record and id at a position
    pub fn at(&self, index: usize) -> Option<(RecordId, &R)> {
        self.entries.get(index).map(|(id, record)| (*id, record))
    }

    /// Replace a record wholesale, keeping its position
    pub fn replace(&mut self, id: RecordId, record: R) -> Result<(), AdminError> {
        let index = self.position(id).ok_or_else(|| Self::not_found(id))?;
        self.replace_at(index, record);
        Ok(())
    }

    /// Remove a record; everything after it shifts down by one
    pub fn remove(&mut self, id: RecordId) -> Result<R, AdminError> {
        let index = self.position(id).ok_or_else(|| Self::not_found(id))?;
        Ok(self.remove_at(index))
    }

    /// Replace the record at a position.
    ///
    /// Panics if `index` is out of range.
    pub fn replace_at(&mut self, index: usize, record: R) {
        self.entries[index].1 = record;
    }

    /// Remove the record at a position.
    ///
    /// Panics if `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> R {
        self.entries.remove(index).1
    }

    /// Records in order, with their ids
    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &R)> + '_ {
        self.entries.iter().map(|(id, record)| (*id, record))
    }

    fn not_found(id: RecordId) -> AdminError {
        AdminError::RecordNotFound { kind: R::KIND, id }
    }
}

#[cfg(test)]
impl<R: Record> RecordStore<R> {
    /// Records in order, without ids
    pub fn records(&self) -> impl Iterator<Item = &R> + '_ {
        self.entries.iter().map(|(_, record)| record)
    }
}
