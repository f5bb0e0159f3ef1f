//! Session Log
//!
//! Append-only list of blocks in render order. Ids come from a per-log
//! counter that only moves forward, including across `clear`.

use crate::session::block::Block;
use crate::types::EntryId;
use serde::Serialize;

/// A block with its id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub id: EntryId,
    #[serde(flatten)]
    pub block: Block,
}

#[derive(Debug, Default)]
pub struct SessionLog {
    entries: Vec<LogEntry>,
    next_id: u64,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `block` under a fresh id and return that id
    pub fn add_entry(&mut self, block: Block) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(LogEntry { id, block });
        id
    }

    /// Drop every entry; ids are not reused afterwards
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Id the next appended entry will receive
    pub fn next_id(&self) -> EntryId {
        EntryId(self.next_id)
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut LogEntry> {
        self.entries.last_mut()
    }

    /// Entries appended at or after `id`
    pub fn since(&self, id: EntryId) -> &[LogEntry] {
        let start = self.entries.partition_point(|entry| entry.id < id);
        &self.entries[start..]
    }
}
