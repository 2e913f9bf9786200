//! Append-only history log.
//!
//! ```
//! # use lognet_core::{ChangeEntry, Color};
//! # use lognet_ledger::HistoryLog;
//! let mut log = HistoryLog::new();
//! log.append(ChangeEntry::new("A".into(), Color::Red));
//! let record = log.seal();
//! assert_eq!(record.entries.len(), 1);
//! assert!(record.verify_integrity());
//! ```

use chrono::{DateTime, Utc};

use lognet_core::ChangeEntry;

use crate::{LogEntry, SessionId, SessionRecord};

/// Ordered record of user changes for one session.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    session_id: SessionId,
    started_at: DateTime<Utc>,
    entries: Vec<LogEntry>,
}

impl HistoryLog {
    /// Start an empty log for a new session.
    pub fn new() -> Self {
        Self {
            session_id: SessionId::new(),
            started_at: Utc::now(),
            entries: Vec::new(),
        }
    }

    /// Append a change and return its sequence number.
    pub fn append(&mut self, change: ChangeEntry) -> u64 {
        let seq = self.entries.len() as u64;
        tracing::trace!(seq, node_id = %change.changed, color = %change.to, "History entry");
        self.entries.push(LogEntry {
            seq,
            change,
            recorded_at: Utc::now(),
        });
        seq
    }

    /// Sequence number the next appended entry will get.
    pub fn next_seq(&self) -> u64 {
        self.entries.len() as u64
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// The changes alone, oldest first.
    pub fn changes(&self) -> impl Iterator<Item = &ChangeEntry> {
        self.entries.iter().map(|e| &e.change)
    }

    /// The `n` most recent entries, oldest first.
    pub fn tail(&self, n: usize) -> &[LogEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Seal the current contents into a hashed record. The log stays open.
    pub fn seal(&self) -> SessionRecord {
        let mut record = SessionRecord {
            id: self.session_id,
            started_at: self.started_at,
            completed_at: Utc::now(),
            entries: self.entries.clone(),
            content_hash: None,
        };
        record.content_hash = Some(record.compute_hash());
        record
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}
