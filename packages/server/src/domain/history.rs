//! Bounded recent-message history.

use std::collections::VecDeque;

use super::entity::MessageRecord;

/// Number of records kept when no limit is configured
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Append-only message history capped at `limit` most recent records
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    records: VecDeque<MessageRecord>,
    limit: usize,
}

impl HistoryBuffer {
    pub fn new(limit: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Append a record, evicting the oldest ones beyond the limit.
    pub fn append(&mut self, record: MessageRecord) {
        self.records.push_back(record);
        while self.records.len() > self.limit {
            self.records.pop_front();
        }
    }

    /// Point-in-time copy of the history, oldest first.
    pub fn snapshot(&self) -> Vec<MessageRecord> {
        self.records.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}
